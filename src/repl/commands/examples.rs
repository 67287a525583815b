//! # Example Preset Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::models::EXAMPLES;

/// Load a built-in example (F1-F3 or Alt+1..3)
pub struct LoadExampleCommand;

impl LoadExampleCommand {
    fn example_index(event: &KeyEvent) -> Option<usize> {
        let index = match event.code {
            KeyCode::F(n) if n >= 1 => n as usize - 1,
            KeyCode::Char(ch) if event.modifiers.contains(KeyModifiers::ALT) => {
                (ch.to_digit(10)? as usize).checked_sub(1)?
            }
            _ => return None,
        };
        (index < EXAMPLES.len()).then_some(index)
    }
}

impl Command for LoadExampleCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        Self::example_index(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::example_index(&event)
            .map(|index| CommandEvent::ExampleLoadRequested { index })
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "LoadExample"
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
    fn function_keys_should_map_to_presets() {
        let context = create_test_context();

        for (n, expected) in [(1, 0), (2, 1), (3, 2)] {
            let event = KeyEvent::new(KeyCode::F(n), KeyModifiers::NONE);
            assert_eq!(
                LoadExampleCommand.execute(event, &context).unwrap(),
                vec![CommandEvent::ExampleLoadRequested { index: expected }]
            );
        }
    }

    #[test]
    fn alt_digit_should_map_to_presets() {
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT);

        assert_eq!(
            LoadExampleCommand.execute(event, &context).unwrap(),
            vec![CommandEvent::ExampleLoadRequested { index: 1 }]
        );
    }

    #[test]
    fn out_of_range_keys_should_not_be_relevant() {
        let context = create_test_context();

        for event in [
            KeyEvent::new(KeyCode::F(4), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('0'), KeyModifiers::ALT),
            KeyEvent::new(KeyCode::Char('4'), KeyModifiers::ALT),
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE),
        ] {
            assert!(!LoadExampleCommand.is_relevant(&context, &event));
        }
    }
}
