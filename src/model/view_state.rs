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

//! Browsing state.
//!
//! This module holds the pagination, filter and mode state of the catalog
//! browser, and the transitions driven by the search form, the reset action,
//! the page controls and the watchlist toggle.
//!
//! Year, minimum rating and sort key are collected from the search form and
//! kept here, but no listing request uses them.

pub(crate) const DEFAULT_SORT_KEY: &str = "popularity.desc";

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub(crate) enum Mode {
    #[default]
    Discover,
    Search,
    Watchlist,
}

impl Mode {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Mode::Discover => "Discover",
            Mode::Search => "Search",
            Mode::Watchlist => "Watchlist",
        }
    }
}

/// Values collected from the search form when it is submitted.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct SearchForm {
    pub(crate) query: String,
    pub(crate) genre: String,
    pub(crate) year: String,
    pub(crate) min_rating: String,
    pub(crate) sort_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ViewState {
    pub(crate) current_page: u32,
    pub(crate) total_pages: u32,
    pub(crate) search_query: String,
    pub(crate) genre_filter: String,
    pub(crate) year_filter: String,
    pub(crate) min_rating_filter: String,
    pub(crate) sort_key: String,
    pub(crate) mode: Mode,
    pub(crate) available_genres: Vec<String>,
    pub(crate) is_loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            search_query: String::new(),
            genre_filter: String::new(),
            year_filter: String::new(),
            min_rating_filter: String::new(),
            sort_key: DEFAULT_SORT_KEY.to_string(),
            mode: Mode::Discover,
            available_genres: vec![],
            is_loading: false,
        }
    }
}

impl ViewState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The remote mode implied by the current query.
    pub(crate) fn remote_mode(&self) -> Mode {
        if self.search_query.is_empty() {
            Mode::Discover
        } else {
            Mode::Search
        }
    }

    pub(crate) fn submit_search(&mut self, form: SearchForm) {
        self.search_query = form.query.trim().to_string();
        self.genre_filter = form.genre;
        self.year_filter = form.year.trim().to_string();
        self.min_rating_filter = form.min_rating.trim().to_string();
        self.sort_key = if form.sort_key.is_empty() {
            DEFAULT_SORT_KEY.to_string()
        } else {
            form.sort_key
        };
        self.current_page = 1;
        self.mode = self.remote_mode();
    }

    /// Clears the query and every filter and returns to discover mode.
    ///
    /// Genres already fetched are kept, they do not depend on the filters.
    pub(crate) fn reset(&mut self) {
        self.current_page = 1;
        self.search_query.clear();
        self.genre_filter.clear();
        self.year_filter.clear();
        self.min_rating_filter.clear();
        self.sort_key = DEFAULT_SORT_KEY.to_string();
        self.mode = Mode::Discover;
    }

    /// Moves to the next page, returning `false` when already on the last.
    pub(crate) fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page, returning `false` when already on the
    /// first.
    pub(crate) fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn toggle_watchlist_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Watchlist => self.remote_mode(),
            Mode::Discover | Mode::Search => Mode::Watchlist,
        };
        self.current_page = 1;
    }

    /// Sets the page count, pulling the current page back into range.
    pub(crate) fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }
}
