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

//! Interactive show grid widget and selection state.
//!
//! The grid does not own the shows it displays, the catalog does. It only
//! tracks which row is selected, so every navigation method is given the
//! current row count.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::ShowSummary;

/// An action raised by the grid for the application to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GridAction {
    OpenDetails,
    ToggleWatchlist,
}

pub(crate) struct ShowGrid {
    pub(crate) table_state: TableState,
}

impl ShowGrid {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// The selected show, if any.
    pub(crate) fn selected<'a>(&self, shows: &'a [ShowSummary]) -> Option<&'a ShowSummary> {
        self.table_state.selected().and_then(|i| shows.get(i))
    }

    /// Selects the first row of a freshly loaded page.
    pub(crate) fn reset_selection(&mut self, len: usize) {
        let selected = if len == 0 { None } else { Some(0) };
        self.table_state = TableState::new().with_selected(selected);
    }

    /// Pulls the selection back inside a page that may have shrunk.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            Some(_) => {}
        }
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::show;

    #[test]
    fn navigation_wraps_around() {
        let mut grid = ShowGrid::new();
        grid.reset_selection(3);

        grid.goto_previous(3);
        assert_eq!(grid.table_state.selected(), Some(2));

        grid.goto_next(3);
        assert_eq!(grid.table_state.selected(), Some(0));

        grid.goto_last(3);
        grid.goto_first(3);
        assert_eq!(grid.table_state.selected(), Some(0));
    }

    #[test]
    fn empty_page_has_no_selection() {
        let mut grid = ShowGrid::new();
        grid.reset_selection(0);
        grid.goto_next(0);

        assert_eq!(grid.table_state.selected(), None);
        assert!(grid.selected(&[]).is_none());
    }

    #[test]
    fn selection_clamped_to_shorter_page() {
        let shows = vec![show(21, "Lost", &[]), show(22, "Fargo", &[])];
        let mut grid = ShowGrid::new();
        grid.table_state.select(Some(15));

        grid.clamp_selection(shows.len());

        assert_eq!(grid.selected(&shows).map(|s| s.id), Some(22));
    }
}
