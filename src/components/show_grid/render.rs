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

//! UI rendering logic for the show grid.
//!
//! One row per show: a watchlist marker, the title, premiere year, rating and
//! genres.

use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::ShowGrid, model::ShowSummary, theme::Theme, util::format::format_rating,
};

const WATCHLIST_MARKER: &str = "★";

impl ShowGrid {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        shows: &[ShowSummary],
        watchlist_ids: &HashSet<i64>,
        theme: &Theme,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));

        if shows.is_empty() {
            f.render_widget(
                Paragraph::new("No shows to display")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.muted_colour))
                    .block(block),
                area,
            );
            return;
        }

        let rows = shows.iter().map(|show| {
            let marker = if watchlist_ids.contains(&show.id) {
                Line::from(WATCHLIST_MARKER).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Line::from(show.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(show.premiere_year.as_str()).style(Style::default().fg(theme.table_year_fg))),
                Cell::from(
                    Line::from(format_rating(show.average_rating))
                        .style(Style::default().fg(theme.table_rating_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(Line::from(show.genres.join(", ")).style(Style::default().fg(theme.table_genre_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(45),
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Percentage(40),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Year"),
                Cell::from(Line::from("Rating").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Genres"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White))
        .block(block);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
