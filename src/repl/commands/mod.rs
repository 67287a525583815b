//! # Command Implementations
//!
//! Key events are mapped to [`CommandEvent`]s by small stateless commands.
//! The registry asks each command whether it is relevant and executes the
//! first match; the controller then applies the events to the ViewModel.

pub mod analyze;
pub mod app;
pub mod context;
pub mod editing;
pub mod events;
pub mod examples;
pub mod navigation;

use anyhow::Result;
use crossterm::event::KeyEvent;

pub use analyze::AnalyzeCommand;
pub use app::AppTerminateCommand;
pub use context::{CommandContext, ViewModelSnapshot};
pub use editing::{
    ClearInputCommand, DeleteCharAtCursorCommand, DeleteCharCommand, InsertCharCommand,
    InsertNewLineCommand,
};
pub use events::{CommandEvent, MovementDirection, ScrollDirection};
pub use examples::LoadExampleCommand;
pub use navigation::{
    MoveCursorLeftCommand, MoveCursorLineEndCommand, MoveCursorLineStartCommand,
    MoveCursorRightCommand, ScrollResultCommand,
};

/// A key binding and the events it produces
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the current context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events for `event`; only called when relevant
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Ordered set of commands; earlier registrations win
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        // Modified keys first so Ctrl/Alt chords never reach InsertChar
        self.add_command(Box::new(AppTerminateCommand));
        self.add_command(Box::new(ClearInputCommand));
        self.add_command(Box::new(LoadExampleCommand));
        self.add_command(Box::new(InsertNewLineCommand));
        self.add_command(Box::new(AnalyzeCommand));
        self.add_command(Box::new(ScrollResultCommand));
        self.add_command(Box::new(MoveCursorLeftCommand));
        self.add_command(Box::new(MoveCursorRightCommand));
        self.add_command(Box::new(MoveCursorLineStartCommand));
        self.add_command(Box::new(MoveCursorLineEndCommand));
        self.add_command(Box::new(DeleteCharCommand));
        self.add_command(Box::new(DeleteCharAtCursorCommand));
        self.add_command(Box::new(InsertCharCommand));
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Run the first relevant command. No match yields no events.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        match self
            .commands
            .iter()
            .find(|command| command.is_relevant(context, &event))
        {
            Some(command) => {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                command.execute(event, context)
            }
            None => {
                tracing::trace!("No command for key {:?}", event);
                Ok(Vec::new())
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn process(
        code: KeyCode,
        modifiers: KeyModifiers,
        state: ViewModelSnapshot,
    ) -> Vec<CommandEvent> {
        let registry = CommandRegistry::new();
        let context = CommandContext::new(state);
        registry
            .process_event(KeyEvent::new(code, modifiers), &context)
            .unwrap()
    }

    #[test]
    fn registry_should_register_defaults() {
        assert_eq!(CommandRegistry::new().command_count(), 13);
    }

    #[test]
    fn ctrl_c_should_quit_not_insert() {
        let events = process(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            ViewModelSnapshot::default(),
        );
        assert_eq!(events, vec![CommandEvent::QuitRequested]);
    }

    #[test]
    fn plain_char_should_insert() {
        let events = process(
            KeyCode::Char('S'),
            KeyModifiers::SHIFT,
            ViewModelSnapshot::default(),
        );
        assert_eq!(events, vec![CommandEvent::text_insert("S")]);
    }

    #[test]
    fn enter_should_analyze_and_alt_enter_should_insert_newline() {
        let enter = process(KeyCode::Enter, KeyModifiers::NONE, ViewModelSnapshot::default());
        assert_eq!(enter, vec![CommandEvent::AnalysisRequested]);

        let alt_enter = process(KeyCode::Enter, KeyModifiers::ALT, ViewModelSnapshot::default());
        assert_eq!(alt_enter, vec![CommandEvent::text_insert("\n")]);
    }

    #[test]
    fn enter_while_loading_should_do_nothing() {
        let state = ViewModelSnapshot {
            is_loading: true,
            ..ViewModelSnapshot::default()
        };
        assert!(process(KeyCode::Enter, KeyModifiers::NONE, state).is_empty());
    }

    #[test]
    fn unbound_key_should_produce_no_events() {
        let events = process(KeyCode::Insert, KeyModifiers::NONE, ViewModelSnapshot::default());
        assert!(events.is_empty());
    }
}
