//! # Analysis Management
//!
//! The request lifecycle: Idle → Loading → Success | Failure, plus example
//! loading. Every analysis is issued under a fresh sequence token and a
//! completion is applied only while its token is the latest one and the view
//! is still Loading; anything else is a stale response and is dropped.

use crate::repl::models::{example, AnalysisResult, RequestState, UserFacingError};
use crate::repl::services::{AnalysisCompletion, AnalysisTicket};
use crate::repl::view_models::core::ViewModel;
use anyhow::Result;

impl ViewModel {
    /// Handle the analyze trigger.
    ///
    /// Returns the ticket to send when a request should go out. Blank input
    /// fails locally; a trigger while Loading is ignored.
    pub fn request_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.state.is_loading() {
            tracing::debug!("Analyze ignored: request #{} in flight", self.sequence);
            return None;
        }

        if self.ingredients.is_blank() {
            tracing::debug!("Analyze rejected: ingredient text is blank");
            self.transition_to(RequestState::Failure(UserFacingError::EmptyInput));
            return None;
        }

        self.sequence += 1;
        self.transition_to(RequestState::Loading);

        Some(AnalysisTicket {
            sequence: self.sequence,
            ingredients: self.ingredients.text().to_string(),
        })
    }

    /// Apply a finished request. Returns false when the completion was stale.
    pub fn apply_completion(&mut self, completion: AnalysisCompletion) -> bool {
        if !self.state.is_loading() || completion.sequence != self.sequence {
            tracing::debug!(
                "Dropping stale completion #{} (current #{}, state {})",
                completion.sequence,
                self.sequence,
                self.state.label()
            );
            return false;
        }

        let new_state = match completion.outcome {
            Ok(response) => {
                RequestState::Success(AnalysisResult::from_segments(response.text_segments()))
            }
            // Cause was already logged by the service
            Err(e) => {
                tracing::debug!("Analysis #{} ended in {e:?}", completion.sequence);
                RequestState::Failure(UserFacingError::AnalysisFailed)
            }
        };
        self.transition_to(new_state);
        true
    }

    /// Prefill the input with a built-in example and return to Idle.
    /// Allowed in every state; an in-flight request becomes stale.
    pub fn load_example(&mut self, index: usize) -> Result<()> {
        let entry =
            example(index).ok_or_else(|| anyhow::anyhow!("No example at index {index}"))?;

        tracing::debug!("Loading example '{}'", entry.label);
        self.ingredients.set_text(entry.ingredients);
        self.transition_to(RequestState::Idle);
        Ok(())
    }
}
