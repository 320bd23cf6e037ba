//! Model session factory and the per-session cache.

use std::sync::Arc;
use std::time::Duration;

use healthbuddy_ai::{AiError, ChatPrompt, GeminiClient, GeminiConfig, TurnProcessor};
use healthbuddy_config::schema::AssistantConfig;

use super::core::ChatSession;
use super::credential::Credential;

/// Builds the turn processor for a session from its confirmed credential.
pub trait ModelFactory {
    fn build(&self, credential: &Credential) -> Result<TurnProcessor, AiError>;
}

/// Production factory: Gemini client behind the configured system prompt.
pub struct GeminiFactory {
    assistant: AssistantConfig,
}

impl GeminiFactory {
    pub fn new(assistant: AssistantConfig) -> Self {
        Self { assistant }
    }
}

impl ModelFactory for GeminiFactory {
    fn build(&self, credential: &Credential) -> Result<TurnProcessor, AiError> {
        let config = GeminiConfig::new(credential.expose())
            .with_model(self.assistant.model.clone())
            .with_max_tokens(self.assistant.max_tokens)
            .with_temperature(self.assistant.temperature)
            .with_timeout(Duration::from_secs(u64::from(
                self.assistant.request_timeout_secs,
            )));
        let client = GeminiClient::new(config)?;
        tracing::info!(model = client.model(), "Model session created");

        let prompt = ChatPrompt::new(self.assistant.system_prompt.clone());
        Ok(TurnProcessor::new(prompt, Arc::new(client)))
    }
}

impl ChatSession {
    /// The cached turn processor, built on first access.
    ///
    /// Only reachable past the credential gate.
    pub(super) fn get_or_create_model_session(&mut self) -> Result<Arc<TurnProcessor>, AiError> {
        if let Some(processor) = &self.ctx.model {
            return Ok(Arc::clone(processor));
        }
        let credential = self
            .ctx
            .credential
            .confirmed()
            .ok_or_else(|| AiError::Unauthorized("no confirmed credential".into()))?;
        let processor = Arc::new(self.factory.build(credential)?);
        self.ctx.model = Some(Arc::clone(&processor));
        Ok(processor)
    }
}
