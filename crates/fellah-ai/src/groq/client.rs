//! Groq API client struct, request building, and response parsing.

use fellah_common::ConfigError;

use crate::{AiError, AiResponse, Message, TokenUsage};

use super::config::GroqConfig;

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    /// Build a client. Rejects a blank API key up front so a misconfigured
    /// assistant fails at startup rather than on the first message.
    pub fn new(config: GroqConfig) -> Result<Self, AiError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential("API key is empty".into()).into());
        }

        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for the chat-completions API.
    ///
    /// The context is sent as a trailing user message.
    pub(crate) fn build_request_body(&self, messages: &[Message], context: &str) -> serde_json::Value {
        let mut msgs: Vec<serde_json::Value> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role().as_str(),
                    "content": msg.content(),
                })
            })
            .collect();

        if !context.is_empty() {
            msgs.push(serde_json::json!({
                "role": "user",
                "content": context,
            }));
        }

        serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let content = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("no message content in response".to_string()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
