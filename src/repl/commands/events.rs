//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    /// Insert text at the cursor
    TextInsertRequested { text: String },

    /// Delete one character on the given side of the cursor
    TextDeleteRequested { direction: MovementDirection },

    /// Request cursor movement within the ingredient text
    CursorMoveRequested { direction: MovementDirection },

    /// Remove all ingredient text
    InputClearRequested,

    /// Run the analysis of the current ingredient text
    AnalysisRequested,

    /// Replace the ingredient text with a built-in example
    ExampleLoadRequested { index: usize },

    /// Scroll the result region
    ResultScrollRequested {
        direction: ScrollDirection,
        amount: usize,
    },

    /// Request to quit application
    QuitRequested,

    /// No action needed
    NoAction,
}

/// Direction for cursor movement and deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Left,
    Right,
    LineStart,
    LineEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl CommandEvent {
    pub fn text_insert(text: impl Into<String>) -> Self {
        Self::TextInsertRequested { text: text.into() }
    }

    pub fn cursor_move(direction: MovementDirection) -> Self {
        Self::CursorMoveRequested { direction }
    }

    pub fn scroll(direction: ScrollDirection, amount: usize) -> Self {
        Self::ResultScrollRequested { direction, amount }
    }
}
