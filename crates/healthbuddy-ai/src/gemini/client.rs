//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let mut contents = Vec::new();

        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => continue, // handled via systemInstruction
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": msg.content }]
            }));
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        let system: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect();
        if !system.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system.join("\n\n") }]
            });
        }

        body
    }

    /// Parse a Gemini `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let Some(candidates) = json["candidates"].as_array() else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::ApiError(format!("prompt blocked: {reason}")));
            }
            return Err(AiError::ParseError("no candidates in response".to_string()));
        };

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let content: String = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key").with_max_tokens(256)).unwrap()
    }

    fn msg(role: Role, content: &str) -> Message {
        Message {
            role,
            content: content.into(),
        }
    }

    #[test]
    fn api_url_names_model_and_method() {
        assert_eq!(
            client().api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_maps_roles_and_keeps_order() {
        let body = client().build_request_body(&[
            msg(Role::System, "Kamu adalah HealthBuddy."),
            msg(Role::User, "Halo"),
            msg(Role::Assistant, "Halo juga!"),
            msg(Role::User, "Apa itu diabetes?"),
        ]);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "Halo");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "Apa itu diabetes?");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "Kamu adalah HealthBuddy."
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn request_body_without_system_has_no_instruction() {
        let body = client().build_request_body(&[msg(Role::User, "Halo")]);
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn parse_response_concatenates_text_parts() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Diabetes adalah " }, { "text": "penyakit kronis." }]
                }
            }],
            "usageMetadata": { "promptTokenCount": 42, "candidatesTokenCount": 7 }
        });

        let response = client().parse_response(json).unwrap();
        assert_eq!(response.content, "Diabetes adalah penyakit kronis.");
        assert_eq!(response.usage.input_tokens, 42);
        assert_eq!(response.usage.output_tokens, 7);
    }

    #[test]
    fn parse_response_without_parts_is_empty_text() {
        let json = serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] });
        let response = client().parse_response(json).unwrap();
        assert!(response.content.is_empty());
        assert_eq!(response.usage, TokenUsage::default());
    }

    #[test]
    fn parse_response_reports_blocked_prompt() {
        let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, AiError::ApiError(ref m) if m.contains("SAFETY")));
    }

    #[test]
    fn parse_response_rejects_missing_candidates() {
        let err = client().parse_response(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));

        let err = client()
            .parse_response(serde_json::json!({ "candidates": [] }))
            .unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }
}
