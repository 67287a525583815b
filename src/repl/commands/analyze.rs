//! # Analyze Command

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};

/// Submit the ingredient text (Enter). Inactive while a request is in flight.
pub struct AnalyzeCommand;

impl Command for AnalyzeCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Enter)
            && event.modifiers.is_empty()
            && !context.state.is_loading
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::AnalysisRequested])
    }

    fn name(&self) -> &'static str {
        "Analyze"
    }
}
