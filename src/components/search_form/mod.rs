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

//! Search form overlay.
//!
//! The form holds three free-text fields backed by [`Input`] and two
//! selectors, genre and sort order. The selectors are cycled rather than
//! typed into. Submitting produces a [`SearchForm`] for the catalog.

mod event;
mod render;

use tui_input::Input;

use crate::model::{SearchForm, ViewState};

/// Sort orders offered by the form, as `(key, label)`. The first entry is
/// the default.
pub(crate) const SORT_OPTIONS: [(&str, &str); 4] = [
    ("popularity.desc", "Most popular"),
    ("vote_average.desc", "Highest rated"),
    ("first_air_date.desc", "Newest first"),
    ("name.asc", "Title A-Z"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FormField {
    #[default]
    Query,
    Genre,
    Year,
    MinRating,
    Sort,
}

impl FormField {
    const ALL: [FormField; 5] = [
        FormField::Query,
        FormField::Genre,
        FormField::Year,
        FormField::MinRating,
        FormField::Sort,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            FormField::Query => "Title",
            FormField::Genre => "Genre",
            FormField::Year => "Year",
            FormField::MinRating => "Min rating",
            FormField::Sort => "Sort by",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchFormAction {
    Submit(SearchForm),
    Cancel,
}

pub(crate) struct SearchFormView {
    pub(crate) is_active: bool,
    pub(crate) focus: FormField,
    pub(crate) query: Input,
    pub(crate) year: Input,
    pub(crate) min_rating: Input,
    /// Empty means any genre.
    pub(crate) genre: String,
    pub(crate) sort_index: usize,
}

impl SearchFormView {
    pub(crate) fn new() -> Self {
        Self {
            is_active: false,
            focus: FormField::Query,
            query: Input::default(),
            year: Input::default(),
            min_rating: Input::default(),
            genre: String::new(),
            sort_index: 0,
        }
    }

    /// Shows the form, pre-filled with the filters currently in effect.
    pub(crate) fn open(&mut self, state: &ViewState) {
        self.query = Input::new(state.search_query.clone());
        self.year = Input::new(state.year_filter.clone());
        self.min_rating = Input::new(state.min_rating_filter.clone());
        self.genre = state.genre_filter.clone();
        self.sort_index = SORT_OPTIONS
            .iter()
            .position(|(key, _)| *key == state.sort_key)
            .unwrap_or(0);
        self.focus = FormField::Query;
        self.is_active = true;
    }

    /// Clears every field and hides the form.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn form(&self) -> SearchForm {
        SearchForm {
            query: self.query.value().to_string(),
            genre: self.genre.clone(),
            year: self.year.value().to_string(),
            min_rating: self.min_rating.value().to_string(),
            sort_key: SORT_OPTIONS[self.sort_index].0.to_string(),
        }
    }

    pub(crate) fn sort_label(&self) -> &'static str {
        SORT_OPTIONS[self.sort_index].1
    }

    fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            FormField::Query => Some(&mut self.query),
            FormField::Year => Some(&mut self.year),
            FormField::MinRating => Some(&mut self.min_rating),
            FormField::Genre | FormField::Sort => None,
        }
    }

    /// Steps the genre selector through "any" followed by `genres`.
    fn cycle_genre(&mut self, genres: &[String], forward: bool) {
        let choices = genres.len() + 1;
        let current = genres
            .iter()
            .position(|g| *g == self.genre)
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % choices
        } else {
            (current + choices - 1) % choices
        };

        self.genre = match next {
            0 => String::new(),
            i => genres[i - 1].clone(),
        };
    }

    fn cycle_sort(&mut self, forward: bool) {
        let len = SORT_OPTIONS.len();
        self.sort_index = if forward {
            (self.sort_index + 1) % len
        } else {
            (self.sort_index + len - 1) % len
        };
    }
}
