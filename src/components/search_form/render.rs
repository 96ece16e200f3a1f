// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Renders the search form overlay and places the cursor in the focused
//! text field.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{
    components::{SearchFormView, search_form::FormField},
    render::popup_area,
    theme::Theme,
};

const LABEL_WIDTH: u16 = 12;

impl SearchFormView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = popup_area(area, 60, 11);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.bar_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let genre = if self.genre.is_empty() {
            "Any genre"
        } else {
            self.genre.as_str()
        };

        let fields = [
            (FormField::Query, self.query.value()),
            (FormField::Genre, genre),
            (FormField::Year, self.year.value()),
            (FormField::MinRating, self.min_rating.value()),
            (FormField::Sort, self.sort_label()),
        ];

        for (row, (field, value)) in fields.iter().enumerate() {
            let focused = *field == self.focus;
            let label_style = if focused {
                Style::default().bold().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.muted_colour)
            };

            let value = match field {
                FormField::Genre | FormField::Sort => format!("< {} >", value),
                _ => value.to_string(),
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
                    label_style,
                ),
                Span::raw(value),
            ]);
            f.render_widget(Paragraph::new(line), rows[row]);
        }

        f.render_widget(
            Paragraph::new("Tab next field  ←/→ change  Enter search  Esc cancel")
                .style(Style::default().fg(theme.muted_colour)),
            rows[6],
        );

        let cursor = match self.focus {
            FormField::Query => Some((0, self.query.visual_cursor())),
            FormField::Year => Some((2, self.year.visual_cursor())),
            FormField::MinRating => Some((3, self.min_rating.visual_cursor())),
            FormField::Genre | FormField::Sort => None,
        };

        if let Some((row, offset)) = cursor {
            let x = rows[row].x + LABEL_WIDTH + offset as u16;
            f.set_cursor_position((x, rows[row].y));
        }
    }
}
