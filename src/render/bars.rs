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

//! Header, footer and error banner.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    catalog::Catalog,
    model::{Mode, ViewState},
    theme::Theme,
};

const KEY_HINTS: &str = "/ search  r reset  n/p page  w watchlist  a add  ⏎ details  q quit";

/// Describes the filters in effect, or an empty string when there are none.
fn filter_summary(state: &ViewState) -> String {
    let mut parts = vec![];
    if state.mode == Mode::Search {
        parts.push(format!("\"{}\"", state.search_query));
    }
    if state.mode == Mode::Discover && !state.genre_filter.is_empty() {
        parts.push(state.genre_filter.clone());
    }
    parts.join(" · ")
}

pub(crate) fn draw_header(f: &mut Frame, area: Rect, catalog: &Catalog, theme: &Theme) {
    let [title_row, status_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let state = &catalog.state;
    let mut title = vec![
        Span::styled(" mazeview ", Style::default().bold().fg(Color::Black).bg(theme.accent_colour)),
        Span::raw(" "),
        Span::styled(state.mode.label(), Style::default().bold().fg(theme.accent_colour)),
    ];

    let filters = filter_summary(state);
    if !filters.is_empty() {
        title.push(Span::raw("  "));
        title.push(Span::styled(filters, Style::default().fg(theme.table_title_fg)));
    }

    f.render_widget(
        Paragraph::new(Line::from(title)).style(Style::default().bg(theme.bar_colour)),
        title_row,
    );

    let status = if state.is_loading && catalog.status.is_empty() {
        "Loading..."
    } else {
        catalog.status.as_str()
    };
    f.render_widget(
        Paragraph::new(format!(" {}", status)).style(Style::default().fg(theme.muted_colour)),
        status_row,
    );
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
    let [hints, page] = Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(area);

    f.render_widget(
        Paragraph::new(format!(" {}", KEY_HINTS))
            .style(Style::default().fg(theme.muted_colour).bg(theme.bar_colour)),
        hints,
    );
    f.render_widget(
        Paragraph::new(format!("Page {} / {} ", state.current_page, state.total_pages))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.accent_colour).bg(theme.bar_colour)),
        page,
    );
}

pub(crate) fn draw_notification(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    f.render_widget(
        Paragraph::new(format!(" {}", message))
            .style(Style::default().bold().fg(Color::White).bg(theme.error_colour)),
        area,
    );
}
