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

//! Input handling for the search form.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{
    SearchFormAction, SearchFormView,
    search_form::FormField,
};

impl SearchFormView {
    /// Handles a key while the form is open.
    ///
    /// Every key is consumed. `Enter` and `Esc` close the form and return
    /// the corresponding action. Other keys edit the focused field.
    pub(crate) fn process_event(
        &mut self,
        key: &KeyEvent,
        genres: &[String],
    ) -> Option<SearchFormAction> {
        match key.code {
            KeyCode::Esc => {
                self.is_active = false;
                return Some(SearchFormAction::Cancel);
            }

            KeyCode::Enter => {
                self.is_active = false;
                return Some(SearchFormAction::Submit(self.form()));
            }

            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),

            KeyCode::Left | KeyCode::Right if self.focus == FormField::Genre => {
                self.cycle_genre(genres, key.code == KeyCode::Right)
            }
            KeyCode::Left | KeyCode::Right if self.focus == FormField::Sort => {
                self.cycle_sort(key.code == KeyCode::Right)
            }

            _ => {
                // Delegate everything else to the focused text field.
                if let Some(input) = self.focused_input() {
                    input.handle_event(&Event::Key(*key));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::model::{SearchForm, ViewState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(view: &mut SearchFormView, text: &str) {
        for c in text.chars() {
            assert_eq!(view.process_event(&key(KeyCode::Char(c)), &[]), None);
        }
    }

    #[test]
    fn typed_fields_are_submitted() {
        let genres = vec!["Drama".to_string(), "Comedy".to_string()];
        let mut view = SearchFormView::new();
        view.open(&ViewState::new());

        type_text(&mut view, "girls");
        view.process_event(&key(KeyCode::Tab), &genres);
        view.process_event(&key(KeyCode::Right), &genres);
        view.process_event(&key(KeyCode::Tab), &genres);
        type_text(&mut view, "2012");
        view.process_event(&key(KeyCode::BackTab), &genres);
        view.process_event(&key(KeyCode::BackTab), &genres);
        view.process_event(&key(KeyCode::BackTab), &genres);
        assert_eq!(view.focus, FormField::Sort);
        view.process_event(&key(KeyCode::Right), &genres);

        let action = view.process_event(&key(KeyCode::Enter), &genres);

        assert!(!view.is_active);
        assert_eq!(
            action,
            Some(SearchFormAction::Submit(SearchForm {
                query: "girls".into(),
                genre: "Drama".into(),
                year: "2012".into(),
                min_rating: String::new(),
                sort_key: "vote_average.desc".into(),
            }))
        );
    }

    #[test]
    fn selectors_ignore_typing() {
        let mut view = SearchFormView::new();
        view.open(&ViewState::new());
        view.process_event(&key(KeyCode::Tab), &[]);

        type_text(&mut view, "xyz");

        assert_eq!(view.form().genre, "");
        assert_eq!(view.form().query, "");
    }

    #[test]
    fn escape_cancels() {
        let mut view = SearchFormView::new();
        view.open(&ViewState::new());

        assert_eq!(
            view.process_event(&key(KeyCode::Esc), &[]),
            Some(SearchFormAction::Cancel)
        );
        assert!(!view.is_active);
    }
}
