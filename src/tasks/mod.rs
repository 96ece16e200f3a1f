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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload network
//! requests from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into calls on a [`ShowSource`] and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Each task produces exactly one result event, whether the request succeeds
//! or fails, so the UI can always clear its in-flight state.

mod handlers;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::error;

use crate::{api::ShowSource, events::AppEvent};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResultsRequest {
    Search { query: String },
    Discover { page_index: u32, genre: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppTask {
    FetchGenres,
    LoadResults { token: u64, request: ResultsRequest },
    OpenDetails(i64),
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the show source and enters a blocking loop, listening for
/// incoming [`AppTask`]s until the task channel closes.
///
/// # Arguments
///
/// * `source` - The listing service the tasks query.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    source: Box<dyn ShowSource>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                source: source.as_ref(),
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                error!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    source: &'a dyn ShowSource,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchGenres => handlers::fetch_genres(ctx),
        AppTask::LoadResults { token, request } => handlers::load_results(ctx, token, request),
        AppTask::OpenDetails(id) => handlers::open_details(ctx, id),
    }
}
