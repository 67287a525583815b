//! # Completion Client
//!
//! Builds and sends the single outbound request to the completion service and
//! decodes its response. Every failure is classified into an [`AnalysisError`]
//! so callers can log the cause while showing the user one message.

use crate::config::AnalyzerConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Prompt text placed before the user's ingredient list
pub const PROMPT_PREAMBLE: &str = "You are an AI health co-pilot that helps users understand food ingredients at the moment of decision.

Do not list ingredients or act like a database. Infer what the user likely cares about without asking questions.

Explain why certain ingredients matter, the trade-offs involved, and where uncertainty exists, using simple, human language.

Avoid fear-mongering, medical claims, and technical jargon.

Your goal is to reduce cognitive effort and help the user feel informed and confident.

Analyze these ingredients:
";

/// Prompt text placed after the user's ingredient list
pub const PROMPT_SUFFIX: &str =
    "\n\nProvide a clear, concise analysis in 3-4 short paragraphs. Focus on what matters most.";

const API_KEY_HEADER: &str = "x-api-key";
const API_VERSION_HEADER: &str = "anthropic-version";

/// Embed the raw ingredient text in the instructional template, unescaped
pub fn render_prompt(ingredients: &str) -> String {
    format!("{PROMPT_PREAMBLE}{ingredients}{PROMPT_SUFFIX}")
}

/// Why an analysis request did not produce a usable response
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("completion service returned {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(#[source] reqwest::Error),

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}

impl AnalysisError {
    /// HTTP status for service-side failures
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::ServiceStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for the Messages API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

/// One element of the response `content` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSegment {
    Text {
        text: String,
    },
    /// Tool calls, thinking blocks and anything else not meant for display
    #[serde(other)]
    Other,
}

/// Response body for the Messages API. Fields we do not use are ignored;
/// a body without `content` does not decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentSegment>,
}

impl MessagesResponse {
    /// Non-empty text of every textual segment, in response order
    pub fn text_segments(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(|segment| match segment {
            ContentSegment::Text { text } => Some(text.as_str()).filter(|t| !t.is_empty()),
            ContentSegment::Other => None,
        })
    }
}

/// HTTP client for the completion service
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    config: Arc<AnalyzerConfig>,
}

impl CompletionClient {
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Body for analyzing `ingredients`
    pub fn request_body(&self, ingredients: &str) -> MessagesRequest {
        MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: render_prompt(ingredients),
            }],
        }
    }

    fn headers(&self) -> Result<HeaderMap, AnalysisError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| AnalysisError::InvalidHeader(API_KEY_HEADER))?;
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let version = HeaderValue::from_str(&self.config.api_version)
            .map_err(|_| AnalysisError::InvalidHeader(API_VERSION_HEADER))?;
        headers.insert(HeaderName::from_static(API_VERSION_HEADER), version);

        Ok(headers)
    }

    /// Build the outbound request without sending it
    pub fn build_request(&self, ingredients: &str) -> Result<reqwest::Request, AnalysisError> {
        self.client
            .post(&self.config.endpoint)
            .headers(self.headers()?)
            .json(&self.request_body(ingredients))
            .build()
            .map_err(AnalysisError::Transport)
    }

    /// Send one analysis request and decode the response
    pub async fn analyze(&self, ingredients: &str) -> Result<MessagesResponse, AnalysisError> {
        let request = self.build_request(ingredients)?;
        tracing::debug!("POST {} ({} chars)", request.url(), ingredients.len());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(AnalysisError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<MessagesResponse>()
            .await
            .map_err(AnalysisError::MalformedResponse)
    }
}
