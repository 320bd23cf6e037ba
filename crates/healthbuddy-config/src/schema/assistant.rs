//! Assistant persona and remote model configuration.

use serde::{Deserialize, Serialize};

/// Model used when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// System instruction sent ahead of every conversation.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Kamu adalah HealthBuddy, asisten kesehatan yang ramah \
dan informatif. Berikan saran kesehatan umum, tips nutrisi, dan gaya hidup sehat dengan bahasa \
yang santai namun jelas. Selalu ingatkan pengguna bahwa saranmu bukan pengganti konsultasi \
dokter. Jawab dalam bahasa Indonesia.";

/// Assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub name: String,
    pub system_prompt: String,
    pub model: String,
    /// Valid range: 1-65536.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "HealthBuddy".into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            model: DEFAULT_MODEL.into(),
            max_tokens: 4096,
            temperature: 0.7,
            request_timeout_secs: 120,
        }
    }
}
