//! Turn processor: prompt template + remote model + text decoder.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::conversation::Turn;
use crate::prompt::ChatPrompt;
use crate::token_tracker::TokenTracker;
use crate::{AiClient, AiError, AiResponse, TokenUsage};

/// Callable that sends a turn's context to the model and returns plain text.
///
/// Built once per chat session and shared by `Arc`.
pub struct TurnProcessor {
    prompt: ChatPrompt,
    client: Arc<dyn AiClient>,
    tracker: Mutex<TokenTracker>,
}

impl TurnProcessor {
    pub fn new(prompt: ChatPrompt, client: Arc<dyn AiClient>) -> Self {
        Self {
            prompt,
            client,
            tracker: Mutex::new(TokenTracker::new()),
        }
    }

    /// Render the prompt from `history` and `input`, make one remote round
    /// trip, and decode the reply to text.
    ///
    /// Errors from the client are returned as-is; nothing is retried.
    pub async fn invoke(&self, history: &[Turn], input: &str) -> Result<String, AiError> {
        let messages = self.prompt.format(history, input);
        debug!(history = history.len(), "Invoking turn processor");

        let response = self.client.send_message(&messages).await?;
        self.tracker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(&response.usage);

        Ok(decode_text(response))
    }

    /// Cumulative token usage and call count for this processor.
    pub fn usage(&self) -> (TokenUsage, u64) {
        let tracker = self.tracker.lock().unwrap_or_else(PoisonError::into_inner);
        (*tracker.total(), tracker.call_count())
    }
}

/// Plain-text output decoder: the reply text, untouched.
fn decode_text(response: AiResponse) -> String {
    response.content
}
