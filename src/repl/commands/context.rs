//! # Command Context
//!
//! Read-only snapshot of view model state handed to commands.

use crate::repl::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone)]
pub struct ViewModelSnapshot {
    pub is_loading: bool,
    pub has_outcome: bool,
    pub ingredient_text: String,
    pub cursor: usize,
    pub terminal_dimensions: (u16, u16),
    pub result_page_size: usize,
}

impl ViewModelSnapshot {
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            is_loading: view_model.is_loading(),
            has_outcome: view_model.request_state().has_outcome(),
            ingredient_text: view_model.ingredient_text().to_string(),
            cursor: view_model.ingredients().cursor(),
            terminal_dimensions: view_model.terminal_size(),
            result_page_size: view_model.result_page_size(),
        }
    }
}

impl Default for ViewModelSnapshot {
    fn default() -> Self {
        Self {
            is_loading: false,
            has_outcome: false,
            ingredient_text: String::new(),
            cursor: 0,
            terminal_dimensions: (80, 24),
            result_page_size: 10,
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }
}
