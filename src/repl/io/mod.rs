//! # I/O Abstraction Layer
//!
//! The form reads terminal events from an [`EventStream`] and paints through a
//! [`RenderStream`]. Production code uses crossterm; tests script the input
//! and record the output.
//!
//! A render stream has two phases. `enter_form` takes the terminal over (raw
//! input, a private screen, pastes delivered as one event) and `leave_form`
//! gives it back. Everything else is positioning and clearing between writes.

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderHandle, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Terminal size as (width, height)
pub type TerminalSize = (u16, u16);

/// Source of key, paste and resize events
pub trait EventStream: Send {
    /// Wait up to `timeout` for the next event; `None` when nothing arrived
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Output side of the form
pub trait RenderStream: Write + Send {
    /// Switch the terminal into form mode
    fn enter_form(&mut self) -> Result<()>;

    /// Undo whatever `enter_form` managed to switch on and show the cursor.
    /// Must be safe to call after a partial or failed `enter_form`.
    fn leave_form(&mut self) -> Result<()>;

    fn clear_screen(&mut self) -> Result<()>;

    /// Move the cursor to (column, row)
    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    fn size(&self) -> Result<TerminalSize>;
}
