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

//! Catalog browsing controller.
//!
//! [`Catalog`] owns the [`ViewState`] and everything derived from it: the
//! shows on the current page, the open details record, the status line and
//! the transient error banner.
//!
//! # Requests
//!
//! Operations that need the listing service do not block. They return the
//! [`AppTask`] to hand to the task worker, and the result comes back later
//! through one of the `apply_*` methods. Watchlist pages are computed
//! locally and never produce a task.
//!
//! Every call to [`Catalog::load_results`] takes a new request token. Only
//! the result carrying the latest token is applied, so a slow response can
//! never overwrite the grid after a newer request was issued.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{
    api::RequestFailure,
    model::{
        Mode, SearchForm, ShowDetails, ShowSummary, ViewState, WatchlistEntry,
        paging::{REMOTE_TOTAL_PAGES, WATCHLIST_PAGE_SIZE, page_slice, total_pages},
    },
    storage::watchlist::Watchlist,
    tasks::{AppTask, ResultsRequest},
    util::format::format_count,
};

const MAX_RECOMMENDATIONS: usize = 5;

const STATUS_FETCHING: &str = "Fetching shows...";
const STATUS_LOADING_DETAILS: &str = "Loading details...";

/// A transient error banner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Notification {
    pub(crate) message: String,
    expires_at: Instant,
}

pub(crate) struct Catalog {
    pub(crate) state: ViewState,
    pub(crate) shows: Vec<ShowSummary>,
    pub(crate) details: Option<ShowDetails>,
    pub(crate) status: String,
    pub(crate) notification: Option<Notification>,
    notification_ttl: Duration,
    latest_request: u64,
}

impl Catalog {
    pub(crate) fn new(notification_ttl: Duration) -> Self {
        Self {
            state: ViewState::new(),
            shows: vec![],
            details: None,
            status: String::new(),
            notification: None,
            notification_ttl,
            latest_request: 0,
        }
    }

    pub(crate) fn fetch_genres(&mut self) -> AppTask {
        AppTask::FetchGenres
    }

    pub(crate) fn apply_genres(&mut self, outcome: Result<Vec<String>, RequestFailure>, now: Instant) {
        match outcome {
            Ok(genres) => self.state.available_genres = genres,
            Err(e) => self.notify_error(e.to_string(), now),
        }
    }

    /// Loads the current page for the current mode.
    ///
    /// In watchlist mode the page is filled in immediately and `None` is
    /// returned. Otherwise the grid is left as it is until the returned task
    /// completes.
    pub(crate) fn load_results(&mut self, watchlist: &Watchlist) -> Option<AppTask> {
        self.latest_request += 1;
        self.state.is_loading = true;
        self.status = STATUS_FETCHING.to_string();

        if self.state.mode == Mode::Watchlist {
            let entries = watchlist.entries();
            self.state
                .set_total_pages(total_pages(entries.len(), WATCHLIST_PAGE_SIZE));
            self.shows = page_slice(&entries, self.state.current_page, WATCHLIST_PAGE_SIZE)
                .iter()
                .map(ShowSummary::from)
                .collect();
            self.status = format!("{} in watchlist", format_count(entries.len()));
            self.state.is_loading = false;
            return None;
        }

        self.state.mode = self.state.remote_mode();
        let request = match self.state.mode {
            Mode::Search => ResultsRequest::Search {
                query: self.state.search_query.clone(),
            },
            _ => ResultsRequest::Discover {
                page_index: self.state.current_page - 1,
                genre: Some(self.state.genre_filter.clone()).filter(|g| !g.is_empty()),
            },
        };

        Some(AppTask::LoadResults {
            token: self.latest_request,
            request,
        })
    }

    /// Applies the outcome of a results request.
    ///
    /// Returns `true` if the grid was replaced. Outcomes of superseded
    /// requests are dropped without touching any state.
    pub(crate) fn apply_results(
        &mut self,
        token: u64,
        outcome: Result<Vec<ShowSummary>, RequestFailure>,
        now: Instant,
    ) -> bool {
        if token != self.latest_request {
            debug!(token, latest = self.latest_request, "Discarding stale results");
            return false;
        }

        self.state.is_loading = false;

        match outcome {
            Ok(shows) => {
                self.state.set_total_pages(REMOTE_TOTAL_PAGES);
                self.status = format!("{} results", format_count(shows.len()));
                self.shows = shows;
                true
            }
            Err(e) => {
                self.status.clear();
                self.notify_error(e.to_string(), now);
                false
            }
        }
    }

    pub(crate) fn submit_search(&mut self, form: SearchForm, watchlist: &Watchlist) -> Option<AppTask> {
        self.state.submit_search(form);
        self.load_results(watchlist)
    }

    pub(crate) fn reset(&mut self, watchlist: &Watchlist) -> Option<AppTask> {
        self.state.reset();
        self.load_results(watchlist)
    }

    pub(crate) fn next_page(&mut self, watchlist: &Watchlist) -> Option<AppTask> {
        if self.state.next_page() {
            self.load_results(watchlist)
        } else {
            None
        }
    }

    pub(crate) fn previous_page(&mut self, watchlist: &Watchlist) -> Option<AppTask> {
        if self.state.previous_page() {
            self.load_results(watchlist)
        } else {
            None
        }
    }

    pub(crate) fn toggle_mode(&mut self, watchlist: &Watchlist) -> Option<AppTask> {
        self.state.toggle_watchlist_mode();
        self.load_results(watchlist)
    }

    pub(crate) fn open_details(&mut self, id: i64) -> AppTask {
        self.status = STATUS_LOADING_DETAILS.to_string();
        AppTask::OpenDetails(id)
    }

    /// Opens the details modal on success. On failure the modal is left as
    /// it was.
    pub(crate) fn apply_details(&mut self, outcome: Result<ShowDetails, RequestFailure>, now: Instant) {
        self.status.clear();
        match outcome {
            Ok(details) => self.details = Some(details),
            Err(e) => self.notify_error(e.to_string(), now),
        }
    }

    pub(crate) fn close_details(&mut self) {
        self.details = None;
    }

    /// Flips the watchlist membership of `entry`.
    ///
    /// Returns the new membership, or `None` if storage failed, in which
    /// case an error banner is shown.
    pub(crate) fn toggle_watchlist(
        &mut self,
        watchlist: &mut Watchlist,
        entry: WatchlistEntry,
        now: Instant,
    ) -> Option<bool> {
        match watchlist.toggle(entry) {
            Ok(added) => Some(added),
            Err(e) => {
                warn!("Watchlist update failed: {:#}", e);
                self.notify_error(format!("Could not update watchlist: {}", e), now);
                None
            }
        }
    }

    /// Shows on the current page sharing a genre with the open details.
    pub(crate) fn recommendations(&self) -> Vec<&ShowSummary> {
        let Some(details) = &self.details else {
            return vec![];
        };

        self.shows
            .iter()
            .filter(|show| show.id != details.id)
            .filter(|show| details.genres.iter().any(|g| show.has_genre(g)))
            .take(MAX_RECOMMENDATIONS)
            .collect()
    }

    pub(crate) fn notify_error(&mut self, message: String, now: Instant) {
        self.notification = Some(Notification {
            message,
            expires_at: now + self.notification_ttl,
        });
    }

    pub(crate) fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests;
