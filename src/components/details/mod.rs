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

//! Show details modal.
//!
//! The modal content comes from the catalog. This view only tracks the
//! selected recommendation.

mod event;
mod render;

use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailsAction {
    Close,
    ToggleWatchlist,
    OpenRecommendation(usize),
}

pub(crate) struct DetailsView {
    pub(crate) list_state: ListState,
}

impl DetailsView {
    pub(crate) fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub(crate) fn reset_selection(&mut self, len: usize) {
        let selected = if len == 0 { None } else { Some(0) };
        self.list_state = ListState::default().with_selected(selected);
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.list_state.select(Some(i));
    }

    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self
            .list_state
            .selected()
            .map_or(0, |i| (i + len - 1) % len);
        self.list_state.select(Some(i));
    }
}
