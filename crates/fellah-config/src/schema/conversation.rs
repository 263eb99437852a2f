//! Conversation window settings.

use fellah_common::Language;
use serde::{Deserialize, Serialize};

/// Conversation history and prompt settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Word budget for the history sent with each request (must be >= 1).
    pub max_context_tokens: usize,
    pub language: Language,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_context_tokens: 1000,
            language: Language::LocalDialect,
        }
    }
}
