//! AI engine for Fellah.
//!
//! Provides:
//! - the `AiClient` seam for chat-completion providers
//! - a Groq (OpenAI-compatible) client
//! - `ConversationManager`: history trimming, prompt decoration, reply
//!   localization, and the turn orchestration that ties them together

pub mod groq;
pub mod manager;

use async_trait::async_trait;
use fellah_common::ConfigError;

pub use groq::{GroqClient, GroqConfig};
pub use manager::{
    decorate, trim, ConversationManager, Exchange, FarmProfile, LocalizationTable, Outcome,
};

/// A chat-completion provider.
///
/// `context` is free-form text the provider appends after the
/// conversation (domain preamble plus any user-supplied material).
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message], context: &str)
        -> Result<AiResponse, AiError>;
}

/// One conversation turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whitespace-delimited word count, used as the token estimate.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone)]
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
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AiError {
    /// Stable short name for the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            AiError::ApiError(_) => "api",
            AiError::RateLimited => "rate_limited",
            AiError::NetworkError(_) => "network",
            AiError::ParseError(_) => "parse",
            AiError::Timeout => "timeout",
            AiError::Config(_) => "config",
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AiError::Timeout
        } else if e.is_decode() {
            AiError::ParseError(e.to_string())
        } else {
            AiError::NetworkError(e.to_string())
        }
    }
}
