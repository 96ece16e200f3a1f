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

use crate::{
    App,
    api::RequestFailure,
    model::{ShowDetails, ShowSummary},
    tasks::AppTask,
};

/// Hands a task to the worker. Without a task the grid was refreshed in
/// place, so the selection is pulled back inside the new page.
pub(super) fn dispatch(app: &mut App, task: Option<AppTask>) -> Result<()> {
    match task {
        Some(task) => app.task_tx.send(task)?,
        None => app.grid.clamp_selection(app.catalog.shows.len()),
    }

    Ok(())
}

pub(super) fn handle_genres_loaded(app: &mut App, outcome: Result<Vec<String>, RequestFailure>) {
    app.catalog.apply_genres(outcome, Instant::now());
}

pub(super) fn handle_results_loaded(
    app: &mut App,
    token: u64,
    outcome: Result<Vec<ShowSummary>, RequestFailure>,
) {
    if app.catalog.apply_results(token, outcome, Instant::now()) {
        app.grid.reset_selection(app.catalog.shows.len());
    }
}

pub(super) fn handle_details_loaded(app: &mut App, outcome: Result<ShowDetails, RequestFailure>) {
    app.catalog.apply_details(outcome, Instant::now());
    app.details_view
        .reset_selection(app.catalog.recommendations().len());
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.catalog.notify_error(message, Instant::now());
}

pub(super) fn handle_tick(app: &mut App) {
    app.catalog.expire_notification(Instant::now());
}
