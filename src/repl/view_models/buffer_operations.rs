//! # Buffer Operations
//!
//! Editing of the ingredient text. Any change to the text clears a result or
//! error on display; while a request is in flight the text still changes but
//! the request is left alone.

use crate::repl::events::{Region, ViewEvent};
use crate::repl::models::RequestState;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Insert text at the cursor (typed characters and pastes)
    pub fn insert_text(&mut self, text: &str) {
        if self.ingredients.insert(text) {
            self.after_text_change();
        }
    }

    /// Backspace
    pub fn delete_char_before_cursor(&mut self) {
        if self.ingredients.delete_before_cursor() {
            self.after_text_change();
        }
    }

    /// Delete
    pub fn delete_char_after_cursor(&mut self) {
        if self.ingredients.delete_at_cursor() {
            self.after_text_change();
        }
    }

    /// Remove all ingredient text
    pub fn clear_input(&mut self) {
        if self.ingredients.is_empty() {
            return;
        }
        self.ingredients.clear();
        self.after_text_change();
    }

    pub fn move_cursor_left(&mut self) {
        if self.ingredients.move_left() {
            self.after_cursor_move();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.ingredients.move_right() {
            self.after_cursor_move();
        }
    }

    pub fn move_cursor_to_line_start(&mut self) {
        if self.ingredients.move_line_start() {
            self.after_cursor_move();
        }
    }

    pub fn move_cursor_to_line_end(&mut self) {
        if self.ingredients.move_line_end() {
            self.after_cursor_move();
        }
    }

    /// The input window follows the cursor, so a move may scroll it
    fn after_cursor_move(&mut self) {
        self.emit_view_event([
            ViewEvent::RegionRedrawRequired {
                region: Region::Input,
            },
            ViewEvent::CursorUpdateRequired,
        ]);
    }

    fn after_text_change(&mut self) {
        if self.state.has_outcome() {
            self.transition_to(RequestState::Idle);
        }
        self.emit_view_event([
            ViewEvent::RegionRedrawRequired {
                region: Region::Input,
            },
            ViewEvent::StatusBarUpdateRequired,
        ]);
    }
}
