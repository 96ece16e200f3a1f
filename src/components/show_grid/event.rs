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

//! Input handling for the show grid.
//!
//! Maps keyboard events to row navigation, and to the grid actions the
//! application acts on.

use crossterm::event::{KeyCode, KeyEvent};

use crate::components::{GridAction, ShowGrid};

impl ShowGrid {
    /// Handles a key for a grid of `len` rows.
    ///
    /// Returns an action only when one of the action keys is pressed while a
    /// row is selected.
    pub(crate) fn process_event(&mut self, key: &KeyEvent, len: usize) -> Option<GridAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),
            _ => {}
        }

        let action = match key.code {
            KeyCode::Enter => Some(GridAction::OpenDetails),
            KeyCode::Char('a') | KeyCode::Char(' ') => Some(GridAction::ToggleWatchlist),
            _ => None,
        };

        action.filter(|_| self.table_state.selected().is_some_and(|i| i < len))
    }
}
