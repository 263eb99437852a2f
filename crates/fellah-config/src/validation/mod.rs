//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`. Suspicious but usable
//! values are reported by [`warnings`] and logged, not rejected.

mod assistant;
mod conversation;
mod helpers;
mod localization;

#[cfg(test)]
mod tests;

use crate::schema::{FellahConfig, CONFIG_SCHEMA_VERSION};
use fellah_common::ConfigError;
use tracing::warn;

use self::helpers::validate_range;

/// Run all validations on a config, collecting all errors.
///
/// Warnings from [`warnings`] are logged.
pub fn validate(config: &FellahConfig) -> Result<(), ConfigError> {
    for warning in warnings(config) {
        warn!("config warning: {warning}");
    }

    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "version", config.version, 1, CONFIG_SCHEMA_VERSION);
    assistant::validate_assistant(&mut errors, config);
    conversation::validate_conversation(&mut errors, config);
    localization::validate_localization(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Values that load fine but probably are not what the user meant.
pub fn warnings(config: &FellahConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    conversation::warn_conversation(&mut warnings, config);
    warnings
}
