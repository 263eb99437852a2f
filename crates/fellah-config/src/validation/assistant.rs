//! Validation for the `[assistant]` section.

use crate::schema::FellahConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &FellahConfig) {
    let assistant = &config.assistant;

    validate_not_blank(errors, "assistant.model", &assistant.model);
    validate_not_blank(errors, "assistant.api_key_env", &assistant.api_key_env);
    validate_range_f64(
        errors,
        "assistant.temperature",
        assistant.temperature,
        0.0,
        1.0,
    );
    validate_range(
        errors,
        "assistant.max_tokens",
        assistant.max_tokens,
        1,
        8192,
    );

    if let Some(url) = &assistant.base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!(
                "assistant.base_url = {url} must start with http:// or https://"
            ));
        }
    }
}
