//! Validation for the `[conversation]` section.

use fellah_common::Language;

use crate::schema::FellahConfig;

pub(crate) fn validate_conversation(errors: &mut Vec<String>, config: &FellahConfig) {
    if config.conversation.max_context_tokens == 0 {
        errors.push("conversation.max_context_tokens must be at least 1".into());
    }
}

/// Unknown language tags deserialize to the generic fallback, which is
/// usually a typo in the file.
pub(crate) fn warn_conversation(warnings: &mut Vec<String>, config: &FellahConfig) {
    if config.conversation.language == Language::Unrecognized {
        let known: Vec<_> = Language::RECOGNIZED.iter().map(Language::tag).collect();
        warnings.push(format!(
            "conversation.language is not recognized, using the generic prompt prefix \
             (expected one of: {})",
            known.join(", ")
        ));
    }
}
