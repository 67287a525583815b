//! # Analysis State
//!
//! The request lifecycle shown to the user: Idle, Loading, Success or Failure.

use thiserror::Error;

/// Separator placed between textual segments of a response
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Errors the user can see. Causes are never shown; see `AnalysisError` for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserFacingError {
    #[error("Please paste some ingredients to analyze")]
    EmptyInput,
    #[error("Unable to analyze ingredients. Please check your API key configuration.")]
    AnalysisFailed,
}

/// Concatenated text returned by the completion service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult(String);

impl AnalysisResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Join textual segments with a blank line between each pair
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self(segments.into_iter().collect::<Vec<_>>().join(SEGMENT_SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paragraphs for display, split on blank lines, with empty ones dropped
    pub fn paragraphs(&self) -> Vec<&str> {
        self.0
            .split(SEGMENT_SEPARATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// Exactly one of these holds at any time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Failure(UserFacingError),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// True when a result or error is on display
    pub fn has_outcome(&self) -> bool {
        matches!(self, RequestState::Success(_) | RequestState::Failure(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "IDLE",
            RequestState::Loading => "ANALYZING",
            RequestState::Success(_) => "DONE",
            RequestState::Failure(_) => "ERROR",
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<UserFacingError> {
        match self {
            RequestState::Failure(error) => Some(*error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_should_join_with_blank_line() {
        let result = AnalysisResult::from_segments(["A", "B"]);
        assert_eq!(result.as_str(), "A\n\nB");
    }

    #[test]
    fn zero_segments_should_give_empty_result() {
        let result = AnalysisResult::from_segments(std::iter::empty());
        assert_eq!(result.as_str(), "");
        assert!(result.is_empty());
        assert!(result.paragraphs().is_empty());
    }

    #[test]
    fn paragraphs_should_split_on_blank_lines() {
        let result = AnalysisResult::new("First point.\n\nSecond point.\n\n\n\nThird.");
        assert_eq!(
            result.paragraphs(),
            vec!["First point.", "Second point.", "Third."]
        );
    }

    #[test]
    fn user_facing_messages_should_be_fixed() {
        assert_eq!(
            UserFacingError::EmptyInput.to_string(),
            "Please paste some ingredients to analyze"
        );
        assert_eq!(
            UserFacingError::AnalysisFailed.to_string(),
            "Unable to analyze ingredients. Please check your API key configuration."
        );
    }

    #[test]
    fn request_state_should_start_idle() {
        let state = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.has_outcome());
        assert!(!state.is_loading());
    }

    #[test]
    fn accessors_should_match_variant() {
        let success = RequestState::Success(AnalysisResult::new("ok"));
        assert_eq!(success.result().map(AnalysisResult::as_str), Some("ok"));
        assert_eq!(success.error(), None);

        let failure = RequestState::Failure(UserFacingError::AnalysisFailed);
        assert_eq!(failure.error(), Some(UserFacingError::AnalysisFailed));
        assert!(failure.has_outcome());
        assert_eq!(failure.label(), "ERROR");
    }
}
