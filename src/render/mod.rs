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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event. Overlays (the details modal, then the search
//! form) are drawn last, over the grid.

mod bars;

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::bars::{draw_footer, draw_header, draw_notification},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a header with the mode, filters and status, the
/// show grid, and a footer with the page indicator and key hints. The error
/// banner, when present, replaces the footer.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like the table scroll position).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let [header, main, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_header(f, header, &app.catalog, &app.theme);

    let watchlist_ids = app.watchlist.ids();
    app.grid
        .draw(f, main, &app.catalog.shows, &watchlist_ids, &app.theme);

    match &app.catalog.notification {
        Some(notification) => draw_notification(f, footer, &notification.message, &app.theme),
        None => draw_footer(f, footer, &app.catalog.state, &app.theme),
    }

    if let Some(details) = &app.catalog.details {
        let recommendations = app.catalog.recommendations();
        app.details_view.draw(
            f,
            main,
            details,
            &recommendations,
            watchlist_ids.contains(&details.id),
            &app.theme,
        );
    }

    if app.search_form.is_active {
        app.search_form.draw(f, area, &app.theme);
    }
}

/// A centred area of at most `width` by `height` cells inside `area`.
pub(crate) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
