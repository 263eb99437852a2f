//! Conversation management.
//!
//! A `ConversationManager` decorates outgoing prompts, trims the history
//! window sent to the provider, and localizes replies. It holds no
//! conversation state: the caller owns the history and passes it into
//! each turn.

mod localize;
mod prompt;
mod respond;
mod window;

pub use localize::LocalizationTable;
pub use prompt::{decorate, FarmProfile, AGRICULTURAL_CONTEXT};
pub use respond::{Exchange, Outcome};
pub use window::{total_words, trim};

use fellah_common::Language;

/// Default word budget for the history window.
pub const DEFAULT_MAX_CONTEXT_TOKENS: usize = 1000;

/// Stateless turn pipeline: prompt decoration, history trimming, and
/// reply localization around a completion call.
#[derive(Debug, Clone)]
pub struct ConversationManager {
    language: Language,
    profile: Option<FarmProfile>,
    localization: LocalizationTable,
    max_context_tokens: usize,
    preamble: String,
}

impl ConversationManager {
    pub fn new() -> Self {
        Self {
            language: Language::LocalDialect,
            profile: None,
            localization: LocalizationTable::darija(),
            max_context_tokens: DEFAULT_MAX_CONTEXT_TOKENS,
            preamble: AGRICULTURAL_CONTEXT.to_string(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_farm_profile(mut self, profile: FarmProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_localization(mut self, table: LocalizationTable) -> Self {
        self.localization = table;
        self
    }

    pub fn with_max_context_tokens(mut self, max: usize) -> Self {
        self.max_context_tokens = max;
        self
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn farm_profile(&self) -> Option<&FarmProfile> {
        self.profile.as_ref()
    }

    pub fn max_context_tokens(&self) -> usize {
        self.max_context_tokens
    }

    /// Prefix `prompt` with this manager's language prefix.
    pub fn decorate(&self, prompt: &str) -> String {
        format!("{}{prompt}", self.language.prefix())
    }

    /// Substitute localized vocabulary and wrap in the greeting template.
    pub fn localize(&self, response: &str) -> String {
        self.localization.localize(response)
    }

    /// Frame with the farm profile (if any), then decorate.
    pub fn prepare_prompt(&self, user_text: &str) -> String {
        match &self.profile {
            Some(profile) => self.decorate(&profile.frame(user_text)),
            None => self.decorate(user_text),
        }
    }
}

impl Default for ConversationManager {
    fn default() -> Self {
        Self::new()
    }
}
