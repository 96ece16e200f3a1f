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

//! Renders the details modal: title and facts, the summary, the watchlist
//! button and the recommendation list.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::{
    components::DetailsView,
    model::{ShowDetails, ShowSummary},
    render::popup_area,
    theme::Theme,
    util::format::format_rating,
};

impl DetailsView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        details: &ShowDetails,
        recommendations: &[&ShowSummary],
        in_watchlist: bool,
        theme: &Theme,
    ) {
        let popup = popup_area(area, 80, 24);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" {} ", details.title))
            .title_style(Style::default().bold().fg(theme.accent_colour))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.bar_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [facts, poster, summary, button, recs] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(7),
        ])
        .areas(inner);

        let facts_line = Line::from(vec![
            Span::styled(details.kind.as_str(), Style::default().fg(theme.muted_colour)),
            Span::raw("  "),
            Span::styled(details.premiere_year.as_str(), Style::default().fg(theme.table_year_fg)),
            Span::raw("  "),
            Span::styled(
                format!("★ {}", format_rating(details.average_rating)),
                Style::default().fg(theme.table_rating_fg),
            ),
            Span::raw("  "),
            Span::styled(details.genres.join(", "), Style::default().fg(theme.table_genre_fg)),
        ]);
        f.render_widget(Paragraph::new(facts_line), facts);

        if !details.poster_url.is_empty() {
            f.render_widget(
                Paragraph::new(details.poster_url.as_str()).style(Style::default().fg(theme.muted_colour)),
                poster,
            );
        }

        f.render_widget(
            Paragraph::new(details.summary.as_str()).wrap(Wrap { trim: true }),
            summary,
        );

        let (label, style) = if in_watchlist {
            ("[a] In Watchlist", Style::default().fg(Color::Black).bg(theme.accent_colour))
        } else {
            ("[a] Add to Watchlist", Style::default().fg(theme.accent_colour))
        };
        f.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), button);

        self.draw_recommendations(f, recs, recommendations, theme);
    }

    fn draw_recommendations(
        &mut self,
        f: &mut Frame,
        area: Rect,
        recommendations: &[&ShowSummary],
        theme: &Theme,
    ) {
        let block = Block::default()
            .title("You might also like")
            .title_style(Style::default().fg(theme.muted_colour))
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour));

        if recommendations.is_empty() {
            f.render_widget(
                Paragraph::new("Nothing similar on this page")
                    .style(Style::default().fg(theme.muted_colour))
                    .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = recommendations
            .iter()
            .map(|show| {
                ListItem::new(Line::from(vec![
                    Span::styled(show.title.as_str(), Style::default().fg(theme.table_title_fg)),
                    Span::raw("  "),
                    Span::styled(show.genres.join(", "), Style::default().fg(theme.table_genre_fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White));

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
