//! # Application Control Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Terminate application (Ctrl+C or Ctrl+Q)
pub struct AppTerminateCommand;

impl Command for AppTerminateCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('c') | KeyCode::Char('q'))
            && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "AppTerminate"
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
    fn app_terminate_should_be_relevant_for_ctrl_c_and_ctrl_q() {
        let context = create_test_context();
        let cmd = AppTerminateCommand;

        for ch in ['c', 'q'] {
            let event = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
            assert!(cmd.is_relevant(&context, &event));
        }
    }

    #[test]
    fn app_terminate_should_not_be_relevant_for_regular_c() {
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);

        assert!(!AppTerminateCommand.is_relevant(&context, &event));
    }

    #[test]
    fn app_terminate_should_produce_quit_event() {
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        let events = AppTerminateCommand.execute(event, &context).unwrap();
        assert_eq!(events, vec![CommandEvent::QuitRequested]);
    }
}
