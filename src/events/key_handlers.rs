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

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    components::{DetailsAction, GridAction, SearchFormAction},
    events::{AppEvent, handlers::dispatch},
    model::WatchlistEntry,
};

/// Maps keyboard input to catalog operations.
///
/// Input goes to the innermost open layer only:
///
/// * **Search form**: while open it consumes every key.
/// * **Details modal**: watchlist toggle, recommendations and closing.
/// * **Grid and global keys**: searching, paging, mode toggle, selection and
///   quitting.
///
/// # Errors
///
/// Returns an error if a task fails to send to the background worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.search_form.is_active {
        return process_search_form_key(app, key);
    }

    if app.catalog.details.is_some() {
        return process_details_key(app, key);
    }

    process_global_key_event(app, key)
}

fn process_search_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let action = app
        .search_form
        .process_event(&key, &app.catalog.state.available_genres);

    if let Some(SearchFormAction::Submit(form)) = action {
        let task = app.catalog.submit_search(form, &app.watchlist);
        dispatch(app, task)?;
    }

    Ok(())
}

fn process_details_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let len = app.catalog.recommendations().len();

    match app.details_view.process_event(&key, len) {
        Some(DetailsAction::Close) => app.catalog.close_details(),

        Some(DetailsAction::ToggleWatchlist) => {
            if let Some(details) = &app.catalog.details {
                let entry = WatchlistEntry::from(details);
                toggle_watchlist(app, entry);
            }
        }

        Some(DetailsAction::OpenRecommendation(index)) => {
            if let Some(id) = app.catalog.recommendations().get(index).map(|s| s.id) {
                let task = app.catalog.open_details(id);
                dispatch(app, Some(task))?;
            }
        }

        None => {}
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') => app.search_form.open(&app.catalog.state),

        KeyCode::Char('r') => {
            app.search_form.reset();
            let task = app.catalog.reset(&app.watchlist);
            dispatch(app, task)?;
        }

        KeyCode::Char('n') | KeyCode::Right => {
            let task = app.catalog.next_page(&app.watchlist);
            dispatch(app, task)?;
        }

        KeyCode::Char('p') | KeyCode::Left => {
            let task = app.catalog.previous_page(&app.watchlist);
            dispatch(app, task)?;
        }

        KeyCode::Char('w') => {
            let task = app.catalog.toggle_mode(&app.watchlist);
            dispatch(app, task)?;
        }

        _ => {
            let len = app.catalog.shows.len();
            match app.grid.process_event(&key, len) {
                Some(GridAction::OpenDetails) => {
                    if let Some(id) = app.grid.selected(&app.catalog.shows).map(|s| s.id) {
                        let task = app.catalog.open_details(id);
                        dispatch(app, Some(task))?;
                    }
                }

                Some(GridAction::ToggleWatchlist) => {
                    if let Some(show) = app.grid.selected(&app.catalog.shows) {
                        let entry = WatchlistEntry::from(show);
                        toggle_watchlist(app, entry);
                    }
                }

                None => {}
            }
        }
    }

    Ok(())
}

// The grid is not reloaded. Membership markers are read from storage on
// every draw.
fn toggle_watchlist(app: &mut App, entry: WatchlistEntry) {
    app.catalog
        .toggle_watchlist(&mut app.watchlist, entry, Instant::now());
}
