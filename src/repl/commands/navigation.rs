//! # Navigation Commands
//!
//! Cursor movement in the ingredient text and scrolling of the result region.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent, MovementDirection, ScrollDirection};

/// Move cursor left (left arrow)
pub struct MoveCursorLeftCommand;

impl Command for MoveCursorLeftCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Left) && !event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::cursor_move(MovementDirection::Left)])
    }

    fn name(&self) -> &'static str {
        "MoveCursorLeft"
    }
}

/// Move cursor right (right arrow)
pub struct MoveCursorRightCommand;

impl Command for MoveCursorRightCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Right) && !event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::cursor_move(MovementDirection::Right)])
    }

    fn name(&self) -> &'static str {
        "MoveCursorRight"
    }
}

/// Move to start of the current line (Home or Ctrl+A)
pub struct MoveCursorLineStartCommand;

impl Command for MoveCursorLineStartCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Home => true,
            KeyCode::Char('a') => event.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::cursor_move(MovementDirection::LineStart)])
    }

    fn name(&self) -> &'static str {
        "MoveCursorLineStart"
    }
}

/// Move to end of the current line (End or Ctrl+E)
pub struct MoveCursorLineEndCommand;

impl Command for MoveCursorLineEndCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::End => true,
            KeyCode::Char('e') => event.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::cursor_move(MovementDirection::LineEnd)])
    }

    fn name(&self) -> &'static str {
        "MoveCursorLineEnd"
    }
}

/// Page through the result (PageUp/PageDown, Ctrl+B/Ctrl+F).
/// Up and Down arrows scroll a single line.
pub struct ScrollResultCommand;

impl ScrollResultCommand {
    fn scroll_for(event: &KeyEvent, page: usize) -> Option<CommandEvent> {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::PageDown => Some(CommandEvent::scroll(ScrollDirection::Down, page)),
            KeyCode::PageUp => Some(CommandEvent::scroll(ScrollDirection::Up, page)),
            KeyCode::Char('f') if ctrl => Some(CommandEvent::scroll(ScrollDirection::Down, page)),
            KeyCode::Char('b') if ctrl => Some(CommandEvent::scroll(ScrollDirection::Up, page)),
            KeyCode::Down => Some(CommandEvent::scroll(ScrollDirection::Down, 1)),
            KeyCode::Up => Some(CommandEvent::scroll(ScrollDirection::Up, 1)),
            _ => None,
        }
    }
}

impl Command for ScrollResultCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        Self::scroll_for(event, context.state.result_page_size).is_some()
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::scroll_for(&event, context.state.result_page_size)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "ScrollResult"
    }
}
