//! # Terminal I/O
//!
//! crossterm-backed streams for the real terminal. Positioning commands are
//! queued and reach the terminal on the renderer's flush; mode switches are
//! executed immediately.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Duration;

/// Reads events from the real terminal
#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Modes switched on by `enter_form`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct FormModes {
    raw: bool,
    alternate_screen: bool,
    bracketed_paste: bool,
}

/// Renders to the real terminal
pub struct TerminalRenderStream<W: Write> {
    writer: W,
    modes: FormModes,
}

impl TerminalRenderStream<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            modes: FormModes::default(),
        }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn enter_form(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.modes.raw = true;
        execute!(self.writer, EnterAlternateScreen)?;
        self.modes.alternate_screen = true;
        execute!(self.writer, EnableBracketedPaste)?;
        self.modes.bracketed_paste = true;
        tracing::debug!("Entered form mode");
        Ok(())
    }

    fn leave_form(&mut self) -> Result<()> {
        // Every step is attempted; the first failure is reported
        let mut first_error: Option<io::Error> = None;
        let mut keep = |result: io::Result<()>| {
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        };

        if self.modes.bracketed_paste {
            keep(execute!(self.writer, DisableBracketedPaste));
        }
        if self.modes.alternate_screen {
            keep(execute!(self.writer, LeaveAlternateScreen));
        }
        if self.modes.raw {
            keep(terminal::disable_raw_mode());
        }
        keep(execute!(self.writer, cursor::Show));

        self.modes = FormModes::default();
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.writer, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn move_cursor(&mut self, column: u16, row: u16) -> Result<()> {
        queue!(self.writer, cursor::MoveTo(column, row))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            queue!(self.writer, cursor::Show)?;
        } else {
            queue!(self.writer, cursor::Hide)?;
        }
        Ok(())
    }

    fn size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_form_without_enter_should_only_show_cursor() {
        let mut output = Vec::new();
        let mut stream = TerminalRenderStream::with_writer(&mut output);

        stream.leave_form().unwrap();

        drop(stream);
        assert_eq!(String::from_utf8(output).unwrap(), "\x1b[?25h");
    }

    #[test]
    fn positioning_should_be_queued_until_flush() {
        let mut output = Vec::new();
        let mut stream = TerminalRenderStream::with_writer(&mut output);

        stream.move_cursor(4, 2).unwrap();
        stream.set_cursor_visible(false).unwrap();
        stream.write_all(b"Oats").unwrap();
        stream.flush().unwrap();

        drop(stream);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\x1b[3;5H\x1b[?25lOats"
        );
    }
}
