//! AI engine for HealthBuddy.
//!
//! Provides the Gemini API client plus the pieces that turn it into a chat:
//! - A chat prompt template (system instruction, history, new input)
//! - A `TurnProcessor` binding template, client, and text decoder
//! - The per-session conversation store
//! - Token usage tracking

pub mod conversation;
pub mod gemini;
pub mod processor;
pub mod prompt;
pub mod token_tracker;

use async_trait::async_trait;

pub use conversation::{ChatRole, ConversationHandle, Turn};
pub use gemini::{GeminiClient, GeminiConfig};
pub use processor::TurnProcessor;
pub use prompt::ChatPrompt;
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
