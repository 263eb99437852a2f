//! Groq API client configuration.

use std::fmt;

use fellah_common::ConfigError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub(crate) const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Groq API client configuration.
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub base_url: String,
}

impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "llama-3.1-70b-versatile".to_string(),
            max_tokens: 256,
            temperature: 0.7,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create config from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(DEFAULT_API_KEY_ENV)
    }

    /// Create config from the named environment variable.
    ///
    /// A missing or blank key is a fatal configuration error.
    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        match std::env::var(name) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(ConfigError::MissingCredential(format!(
                "no API key provided; set {name} in the environment or a .env file"
            ))),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_llama_on_groq() {
        let config = GroqConfig::new("gsk_test");
        assert_eq!(config.model, "llama-3.1-70b-versatile");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn debug_redacts_key() {
        let config = GroqConfig::new("gsk_super_secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("gsk_super_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn builders_override_fields() {
        let config = GroqConfig::new("k")
            .with_model("llama-3.3-70b-versatile")
            .with_max_tokens(512)
            .with_temperature(0.1)
            .with_base_url("http://localhost:8080/v1");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn missing_env_var_is_missing_credential() {
        let err = GroqConfig::from_env_var("FELLAH_TEST_KEY_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(_)));
        assert!(err.to_string().contains("FELLAH_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
