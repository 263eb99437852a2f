//! Validation for the `[localization]` section.

use crate::schema::FellahConfig;

/// Empty source terms would match between every character.
pub(crate) fn validate_localization(errors: &mut Vec<String>, config: &FellahConfig) {
    let Some(terms) = &config.localization.terms else {
        return;
    };
    for (i, term) in terms.iter().enumerate() {
        if term.source.is_empty() {
            errors.push(format!("localization.terms[{i}].source must not be empty"));
        }
    }
}
