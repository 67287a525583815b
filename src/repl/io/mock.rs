//! # Mock I/O Implementations for Testing
//!
//! Scripted event input and recording render output, so the controller can be
//! exercised without a TTY.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock event stream with pre-programmed events
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl EventStream for MockEventStream {
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    EnterForm,
    LeaveForm,
    ClearScreen,
    MoveCursor(u16, u16),
    CursorVisible(bool),
    Write(Vec<u8>),
    Flush,
}

#[derive(Debug, Default)]
struct Recording {
    commands: Vec<RenderCommand>,
    /// Bytes written since the last clear_screen
    output: Vec<u8>,
}

/// Shared view of a [`MockRenderStream`] that stays usable after the stream
/// has been moved into a controller.
#[derive(Debug, Clone)]
pub struct MockRenderHandle {
    recording: Arc<Mutex<Recording>>,
}

impl MockRenderHandle {
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.recording
            .lock()
            .map(|r| r.commands.clone())
            .unwrap_or_default()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands().contains(command)
    }

    /// Everything written since the last screen clear, escape sequences included
    pub fn output(&self) -> String {
        self.recording
            .lock()
            .map(|r| String::from_utf8_lossy(&r.output).to_string())
            .unwrap_or_default()
    }

    /// Written text with ANSI escape sequences removed
    pub fn plain_output(&self) -> String {
        strip_ansi(&self.output())
    }
}

/// Mock render stream that records every operation
pub struct MockRenderStream {
    recording: Arc<Mutex<Recording>>,
    terminal_size: TerminalSize,
    cursor_visible: bool,
    in_form: bool,
    fail_leave: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            recording: Arc::new(Mutex::new(Recording::default())),
            terminal_size: size,
            cursor_visible: true,
            in_form: false,
            fail_leave: false,
        }
    }

    /// A stream whose `leave_form` records the attempt and then fails
    pub fn with_failing_leave(mut self) -> Self {
        self.fail_leave = true;
        self
    }

    pub fn handle(&self) -> MockRenderHandle {
        MockRenderHandle {
            recording: Arc::clone(&self.recording),
        }
    }

    fn record(&self, command: RenderCommand) {
        if let Ok(mut recording) = self.recording.lock() {
            recording.commands.push(command);
        }
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut recording) = self.recording.lock() {
            recording.output.extend_from_slice(buf);
            recording.commands.push(RenderCommand::Write(buf.to_vec()));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn enter_form(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterForm);
        self.in_form = true;
        Ok(())
    }

    fn leave_form(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveForm);
        if self.fail_leave {
            anyhow::bail!("terminal restore failed");
        }
        self.in_form = false;
        self.cursor_visible = true;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        if let Ok(mut recording) = self.recording.lock() {
            recording.commands.push(RenderCommand::ClearScreen);
            recording.output.clear();
        }
        Ok(())
    }

    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(column, row));
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.record(RenderCommand::CursorVisible(visible));
        self.cursor_visible = visible;
        Ok(())
    }

    fn size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove CSI escape sequences (`ESC [ ... final-byte`)
fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            plain.push(ch);
        }
    }

    plain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn mock_event_stream_should_provide_events_in_order() {
        let events = vec![
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())),
            Event::Paste("Oats\nSalt".to_string()),
        ];
        let mut stream = MockEventStream::new(events);
        let wait = Duration::from_millis(0);

        match stream.next_event(wait).unwrap() {
            Some(Event::Key(key)) => assert_eq!(key.code, KeyCode::Char('a')),
            other => panic!("Expected key event, got {other:?}"),
        }
        assert_eq!(
            stream.next_event(wait).unwrap(),
            Some(Event::Paste("Oats\nSalt".to_string()))
        );
        assert_eq!(stream.next_event(wait).unwrap(), None);
    }

    #[test]
    fn mock_render_stream_should_record_commands() {
        let mut stream = MockRenderStream::new();
        let handle = stream.handle();

        stream.clear_screen().unwrap();
        stream.move_cursor(10, 20).unwrap();
        stream.set_cursor_visible(false).unwrap();
        stream.write_all(b"Hello").unwrap();
        stream.flush().unwrap();

        assert_eq!(
            handle.commands(),
            vec![
                RenderCommand::ClearScreen,
                RenderCommand::MoveCursor(10, 20),
                RenderCommand::CursorVisible(false),
                RenderCommand::Write(b"Hello".to_vec()),
                RenderCommand::Flush,
            ]
        );
        assert_eq!(handle.output(), "Hello");
    }

    #[test]
    fn leaving_form_should_restore_cursor() {
        let mut stream = MockRenderStream::with_size((120, 40));
        assert_eq!(stream.size().unwrap(), (120, 40));

        stream.enter_form().unwrap();
        stream.set_cursor_visible(false).unwrap();
        assert!(stream.in_form);
        assert!(!stream.cursor_visible);

        stream.leave_form().unwrap();
        assert!(!stream.in_form);
        assert!(stream.cursor_visible);
    }

    #[test]
    fn failing_leave_should_still_record_attempt() {
        let mut stream = MockRenderStream::new().with_failing_leave();
        let handle = stream.handle();

        stream.enter_form().unwrap();
        assert!(stream.leave_form().is_err());
        assert_eq!(
            handle.commands(),
            vec![RenderCommand::EnterForm, RenderCommand::LeaveForm]
        );
    }

    #[test]
    fn clear_screen_should_reset_captured_output() {
        let mut stream = MockRenderStream::new();
        let handle = stream.handle();

        stream.write_all(b"old").unwrap();
        stream.clear_screen().unwrap();
        stream.write_all(b"new").unwrap();

        assert_eq!(handle.output(), "new");
    }

    #[test]
    fn plain_output_should_strip_escape_sequences() {
        let mut stream = MockRenderStream::new();
        let handle = stream.handle();

        stream.write_all(b"\x1b[1mBold\x1b[0m and \x1b[38;5;9mred\x1b[39m").unwrap();

        assert_eq!(handle.plain_output(), "Bold and red");
    }
}
