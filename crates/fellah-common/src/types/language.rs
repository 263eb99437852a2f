//! Response/prompt language tags.

use serde::{Deserialize, Serialize};

/// Prompt language selected by the user.
///
/// The four recognized tags each carry a fixed prompt prefix. Anything
/// else maps to [`Language::Unrecognized`], which uses a generic prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Language {
    /// Moroccan Darija.
    #[default]
    LocalDialect,
    French,
    Arabic,
    English,
    #[serde(other)]
    Unrecognized,
}

impl Language {
    pub const RECOGNIZED: &'static [Language] = &[
        Language::LocalDialect,
        Language::French,
        Language::Arabic,
        Language::English,
    ];

    /// Resolve a tag. Never fails: unknown tags become `Unrecognized`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "local_dialect" => Language::LocalDialect,
            "french" => Language::French,
            "arabic" => Language::Arabic,
            "english" => Language::English,
            _ => Language::Unrecognized,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::LocalDialect => "local_dialect",
            Language::French => "french",
            Language::Arabic => "arabic",
            Language::English => "english",
            Language::Unrecognized => "unrecognized",
        }
    }

    /// Fixed prefix prepended to every outgoing prompt in this language.
    pub fn prefix(&self) -> &'static str {
        match self {
            Language::LocalDialect => "Shkun 3awn l-fellah: ",
            Language::French => "Aide agricole au Maroc : ",
            Language::Arabic => "مساعد زراعي: ",
            Language::English => "Moroccan Agricultural Advisor: ",
            Language::Unrecognized => "Agricultural Advice: ",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
