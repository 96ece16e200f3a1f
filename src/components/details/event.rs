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

use crossterm::event::{KeyCode, KeyEvent};

use crate::components::{DetailsAction, DetailsView};

impl DetailsView {
    /// Handles a key while the modal is open, given the number of
    /// recommendations listed.
    pub(crate) fn process_event(&mut self, key: &KeyEvent, len: usize) -> Option<DetailsAction> {
        match key.code {
            KeyCode::Esc => Some(DetailsAction::Close),
            KeyCode::Char('a') => Some(DetailsAction::ToggleWatchlist),

            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next(len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous(len);
                None
            }

            KeyCode::Enter => self
                .list_state
                .selected()
                .filter(|i| *i < len)
                .map(DetailsAction::OpenRecommendation),

            _ => None,
        }
    }
}
