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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the shows
//! returned by the listing service and the entries of the locally persisted
//! watchlist, along with the view state that drives browsing.

pub(crate) mod paging;
pub(crate) mod view_state;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub(crate) use view_state::{Mode, SearchForm, ViewState};

/// A single show as listed in a result grid.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShowSummary {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) poster_url: String,
    pub(crate) average_rating: Option<f64>,
    pub(crate) premiere_year: String,
    pub(crate) genres: Vec<String>,
}

impl ShowSummary {
    pub(crate) fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// The full record of a show, as shown in the details modal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShowDetails {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) kind: String,
    pub(crate) poster_url: String,
    pub(crate) average_rating: Option<f64>,
    pub(crate) premiere_year: String,
    pub(crate) genres: Vec<String>,
    pub(crate) summary: String,
}

/// A favourited show, persisted in insertion order.
///
/// Field names on disk follow the `watchlist_v1` storage format, so the
/// rating is stored as `vote_average`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WatchlistEntry {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) poster_path: String,
    #[serde(rename = "vote_average", default)]
    pub(crate) rating: f64,
}

impl From<&ShowSummary> for WatchlistEntry {
    fn from(show: &ShowSummary) -> Self {
        Self {
            id: show.id,
            title: show.title.clone(),
            poster_path: show.poster_url.clone(),
            rating: show.average_rating.unwrap_or(0.0),
        }
    }
}

impl From<&ShowDetails> for WatchlistEntry {
    fn from(show: &ShowDetails) -> Self {
        Self {
            id: show.id,
            title: show.title.clone(),
            poster_path: show.poster_url.clone(),
            rating: show.average_rating.unwrap_or(0.0),
        }
    }
}

impl From<&WatchlistEntry> for ShowSummary {
    // A zero rating is how an unrated show is stored.
    fn from(entry: &WatchlistEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            poster_url: entry.poster_path.clone(),
            average_rating: (entry.rating > 0.0).then_some(entry.rating),
            premiere_year: String::new(),
            genres: vec![],
        }
    }
}

/// Collects the distinct genres of `shows`, in the order first seen.
pub(crate) fn collect_genres(shows: &[ShowSummary]) -> Vec<String> {
    let mut seen = HashSet::new();
    shows
        .iter()
        .flat_map(|show| show.genres.iter())
        .filter(|genre| seen.insert(*genre))
        .cloned()
        .collect()
}

/// Keeps only the shows tagged with exactly `genre`.
pub(crate) fn filter_by_genre(shows: Vec<ShowSummary>, genre: &str) -> Vec<ShowSummary> {
    shows.into_iter().filter(|show| show.has_genre(genre)).collect()
}

#[cfg(test)]
pub(crate) fn show(id: i64, title: &str, genres: &[&str]) -> ShowSummary {
    ShowSummary {
        id,
        title: title.to_string(),
        poster_url: String::new(),
        average_rating: None,
        premiere_year: String::new(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}
