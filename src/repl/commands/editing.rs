//! # Text Editing Commands
//!
//! Insertion and deletion in the ingredient text. Editing stays available
//! while a request is in flight.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent, MovementDirection};

/// Insert a typed character
pub struct InsertCharCommand;

impl Command for InsertCharCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Char(ch) => {
                !event.modifiers.contains(KeyModifiers::CONTROL)
                    && !event.modifiers.contains(KeyModifiers::ALT)
                    && !ch.is_control()
            }
            KeyCode::Tab => true,
            _ => false,
        }
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(vec![CommandEvent::text_insert(ch.to_string())]),
            KeyCode::Tab => Ok(vec![CommandEvent::text_insert(" ")]),
            _ => Ok(vec![]),
        }
    }

    fn name(&self) -> &'static str {
        "InsertChar"
    }
}

/// Insert a line break (Alt+Enter or Ctrl+J); plain Enter analyzes
pub struct InsertNewLineCommand;

impl Command for InsertNewLineCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Enter => event.modifiers.contains(KeyModifiers::ALT),
            KeyCode::Char('j') => event.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::text_insert("\n")])
    }

    fn name(&self) -> &'static str {
        "InsertNewLine"
    }
}

/// Delete character before cursor (Backspace)
pub struct DeleteCharCommand;

impl Command for DeleteCharCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Backspace)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TextDeleteRequested {
            direction: MovementDirection::Left,
        }])
    }

    fn name(&self) -> &'static str {
        "DeleteChar"
    }
}

/// Delete character at cursor (Delete)
pub struct DeleteCharAtCursorCommand;

impl Command for DeleteCharAtCursorCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Delete)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TextDeleteRequested {
            direction: MovementDirection::Right,
        }])
    }

    fn name(&self) -> &'static str {
        "DeleteCharAtCursor"
    }
}

/// Clear all ingredient text (Ctrl+U)
pub struct ClearInputCommand;

impl Command for ClearInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('u'))
            && event.modifiers.contains(KeyModifiers::CONTROL)
            && !context.state.ingredient_text.is_empty()
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::InputClearRequested])
    }

    fn name(&self) -> &'static str {
        "ClearInput"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::ViewModelSnapshot;

    fn create_test_context() -> CommandContext {
        CommandContext::new(ViewModelSnapshot::default())
    }

    #[test]
    fn insert_char_should_accept_unicode() {
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE);

        assert!(InsertCharCommand.is_relevant(&context, &event));
        assert_eq!(
            InsertCharCommand.execute(event, &context).unwrap(),
            vec![CommandEvent::text_insert("é")]
        );
    }

    #[test]
    fn insert_char_should_ignore_chords() {
        let context = create_test_context();
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let event = KeyEvent::new(KeyCode::Char('a'), modifiers);
            assert!(!InsertCharCommand.is_relevant(&context, &event));
        }
    }

    #[test]
    fn insert_newline_should_need_modifier() {
        let context = create_test_context();

        let plain = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let alt = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        let ctrl_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);

        assert!(!InsertNewLineCommand.is_relevant(&context, &plain));
        assert!(InsertNewLineCommand.is_relevant(&context, &alt));
        assert!(InsertNewLineCommand.is_relevant(&context, &ctrl_j));
    }

    #[test]
    fn delete_commands_should_pick_direction() {
        let context = create_test_context();

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(
            DeleteCharCommand.execute(backspace, &context).unwrap(),
            vec![CommandEvent::TextDeleteRequested {
                direction: MovementDirection::Left
            }]
        );

        let delete = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(
            DeleteCharAtCursorCommand.execute(delete, &context).unwrap(),
            vec![CommandEvent::TextDeleteRequested {
                direction: MovementDirection::Right
            }]
        );
    }

    #[test]
    fn clear_input_should_need_text() {
        let event = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);

        assert!(!ClearInputCommand.is_relevant(&create_test_context(), &event));

        let context = CommandContext::new(ViewModelSnapshot {
            ingredient_text: "Salt".to_string(),
            ..ViewModelSnapshot::default()
        });
        assert!(ClearInputCommand.is_relevant(&context, &event));
    }
}
