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

//! Show listing data access.
//!
//! This module defines the [`ShowSource`] seam used by the task worker and
//! its TVmaze implementation, [`TvMazeClient`].
//!
//! # Endpoints
//!
//! * `GET /shows?page=N` - a page of the full catalog, zero-based.
//! * `GET /search/shows?q=...` - matches for a free-text query.
//! * `GET /shows/{id}` - the full record of a single show.
//!
//! Every call is a single blocking request with no retry. Any failure, be it
//! a non-success status, a transport error or an unreadable body, is
//! reported as a [`RequestFailure`].

pub(crate) mod wire;

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use ureq::Agent;

use crate::{
    api::wire::{TvMazeSearchHit, TvMazeShow},
    model::{ShowDetails, ShowSummary},
};

const USER_AGENT: &str = concat!("mazeview/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Error, PartialEq)]
pub(crate) enum RequestFailure {
    #[error("Request failed: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// A source of show listings.
pub(crate) trait ShowSource: Send {
    /// Fetches one page of the catalog, `page_index` being zero-based.
    fn list_shows(&self, page_index: u32) -> Result<Vec<ShowSummary>, RequestFailure>;

    /// Fetches the shows matching a free-text query.
    fn search_shows(&self, query: &str) -> Result<Vec<ShowSummary>, RequestFailure>;

    /// Fetches the full record of a single show.
    fn show_details(&self, id: i64) -> Result<ShowDetails, RequestFailure>;
}

pub(crate) struct TvMazeClient {
    agent: Agent,
    base_url: String,
}

impl TvMazeClient {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .new_agent();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// Failures are logged here, at the data-access boundary, and returned
    /// to the caller unchanged.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestFailure> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");

        self.fetch(&url, query).inspect_err(|e| {
            warn!(%url, error = %e, "Request to listing service failed");
        })
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestFailure> {
        let mut request = self.agent.get(url).header("User-Agent", USER_AGENT);
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        let mut response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => RequestFailure::Status(status),
            other => RequestFailure::Transport(other.to_string()),
        })?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| RequestFailure::Decode(e.to_string()))
    }
}

impl ShowSource for TvMazeClient {
    fn list_shows(&self, page_index: u32) -> Result<Vec<ShowSummary>, RequestFailure> {
        let page = page_index.to_string();
        let shows: Vec<TvMazeShow> = self.get_json("/shows", &[("page", page.as_str())])?;

        Ok(shows.into_iter().map(TvMazeShow::into_summary).collect())
    }

    fn search_shows(&self, query: &str) -> Result<Vec<ShowSummary>, RequestFailure> {
        let hits: Vec<TvMazeSearchHit> = self.get_json("/search/shows", &[("q", query)])?;

        Ok(hits.into_iter().map(|hit| hit.show.into_summary()).collect())
    }

    fn show_details(&self, id: i64) -> Result<ShowDetails, RequestFailure> {
        let show: TvMazeShow = self.get_json(&format!("/shows/{id}"), &[])?;

        Ok(show.into_details())
    }
}
