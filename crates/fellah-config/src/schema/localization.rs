//! Reply localization settings.

use serde::{Deserialize, Serialize};

/// One source-term to target-term substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermConfig {
    pub source: String,
    pub target: String,
}

/// Reply post-processing.
///
/// `terms` are applied in file order. When absent, the built-in Darija
/// vocabulary is used; an explicit empty list disables substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    pub greeting: String,
    pub suffix: String,
    pub terms: Option<Vec<TermConfig>>,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            greeting: "📡 Marhaba, hada l-jawab dyalk:\n\n".into(),
            suffix: String::new(),
            terms: None,
        }
    }
}
