//! # Services Layer
//!
//! Services own external resources: here, the completion service connection
//! and the channel that brings finished requests back to the event loop.

pub mod analysis;
pub mod completion;

pub use analysis::{AnalysisCompletion, AnalysisService, AnalysisTicket};
pub use completion::{
    render_prompt, AnalysisError, ChatMessage, CompletionClient, ContentSegment, MessagesRequest,
    MessagesResponse, PROMPT_PREAMBLE, PROMPT_SUFFIX,
};
