//! # Analysis Service
//!
//! Runs completion requests off the event loop. Each request is spawned on a
//! tokio task and its outcome is sent back over a channel together with the
//! sequence token it was issued under.

use super::completion::{AnalysisError, CompletionClient, MessagesResponse};
use crate::config::AnalyzerConfig;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Capacity of the completion channel
const COMPLETION_CHANNEL_SIZE: usize = 10;

/// A request the view model has committed to sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub sequence: u64,
    pub ingredients: String,
}

/// Outcome of one spawned request
#[derive(Debug)]
pub struct AnalysisCompletion {
    pub sequence: u64,
    pub outcome: Result<MessagesResponse, AnalysisError>,
}

pub struct AnalysisService {
    client: CompletionClient,
    completion_sender: mpsc::Sender<AnalysisCompletion>,
    completion_receiver: mpsc::Receiver<AnalysisCompletion>,
}

impl AnalysisService {
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_CHANNEL_SIZE);
        Self {
            client: CompletionClient::new(config),
            completion_sender,
            completion_receiver,
        }
    }

    pub fn client(&self) -> &CompletionClient {
        &self.client
    }

    /// Spawn the request for `ticket`. Must be called from within a tokio runtime.
    pub fn submit(&self, ticket: AnalysisTicket) {
        let client = self.client.clone();
        let sender = self.completion_sender.clone();

        tracing::info!("Submitting analysis #{}", ticket.sequence);
        tokio::spawn(async move {
            let outcome = client.analyze(&ticket.ingredients).await;
            if let Err(e) = &outcome {
                tracing::error!("Analysis #{} failed: {e}", ticket.sequence);
            }

            // Receiver is gone only when the app is shutting down
            let _ = sender
                .send(AnalysisCompletion {
                    sequence: ticket.sequence,
                    outcome,
                })
                .await;
        });
    }

    /// Next finished request, if any (non-blocking)
    pub fn poll_completion(&mut self) -> Option<AnalysisCompletion> {
        self.completion_receiver.try_recv().ok()
    }

    /// Wait for the next finished request
    pub async fn next_completion(&mut self) -> Option<AnalysisCompletion> {
        self.completion_receiver.recv().await
    }
}
