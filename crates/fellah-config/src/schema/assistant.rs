//! Language-model provider settings.

use serde::{Deserialize, Serialize};

/// Completion provider configuration.
///
/// The API key itself is never stored here; it is read from the
/// environment variable named by `api_key_env`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    /// Sampling temperature (valid range: 0.0-1.0).
    pub temperature: f64,
    /// Maximum output tokens per reply (valid range: 1-8192).
    pub max_tokens: u32,
    /// Override for the OpenAI-compatible endpoint base URL.
    pub base_url: Option<String>,
    pub api_key_env: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-70b-versatile".into(),
            temperature: 0.7,
            max_tokens: 256,
            base_url: None,
            api_key_env: "GROQ_API_KEY".into(),
        }
    }
}
