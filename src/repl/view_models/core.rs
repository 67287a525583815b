//! # Core ViewModel Structure
//!
//! The ViewModel owns the ingredient text and the request state machine.
//! Behavior is split across sibling modules, each adding an `impl ViewModel`
//! block: editing, analysis lifecycle and display preparation.

use crate::repl::events::{Region, ViewEvent};
use crate::repl::models::{IngredientModel, RequestState};

/// Main ViewModel for the analyzer screen
#[derive(Debug)]
pub struct ViewModel {
    pub(super) ingredients: IngredientModel,
    pub(super) state: RequestState,
    /// Token of the most recently issued analysis; 0 means none yet
    pub(super) sequence: u64,
    /// First visible line of the result region
    pub(super) result_scroll: usize,
    pub(super) terminal_size: (u16, u16),
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            ingredients: IngredientModel::new(),
            state: RequestState::Idle,
            sequence: 0,
            result_scroll: 0,
            terminal_size: (80, 24),
            pending_view_events: Vec::new(),
        }
    }

    pub fn ingredients(&self) -> &IngredientModel {
        &self.ingredients
    }

    pub fn ingredient_text(&self) -> &str {
        self.ingredients.text()
    }

    pub fn request_state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the analyze trigger is currently enabled
    pub fn can_analyze(&self) -> bool {
        !self.state.is_loading() && !self.ingredients.is_blank()
    }

    pub fn current_sequence(&self) -> u64 {
        self.sequence
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.result_scroll = self.result_scroll.min(self.max_result_scroll());
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    /// Move to a new state, resetting the result scroll and marking the result
    /// region and status bar stale
    pub(super) fn transition_to(&mut self, new_state: RequestState) {
        tracing::debug!(
            "Request state: {} -> {}",
            self.state.label(),
            new_state.label()
        );
        self.state = new_state;
        self.result_scroll = 0;
        self.emit_view_event([
            ViewEvent::RegionRedrawRequired {
                region: Region::Input,
            },
            ViewEvent::RegionRedrawRequired {
                region: Region::Result,
            },
            ViewEvent::StatusBarUpdateRequired,
        ]);
    }

    pub(super) fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        self.pending_view_events.extend(events);
    }

    /// Drain view events accumulated since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
