//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = FellahConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_above_one() {
    let mut config = FellahConfig::default();
    config.assistant.temperature = 1.2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.temperature"));
}

#[test]
fn catches_negative_temperature() {
    let mut config = FellahConfig::default();
    config.assistant.temperature = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = FellahConfig::default();
    config.assistant.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn temperature_bounds_are_inclusive() {
    let mut config = FellahConfig::default();
    config.assistant.temperature = 0.0;
    assert!(validate(&config).is_ok());
    config.assistant.temperature = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = FellahConfig::default();
    config.assistant.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.max_tokens"));
}

#[test]
fn catches_blank_model() {
    let mut config = FellahConfig::default();
    config.assistant.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.model"));
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = FellahConfig::default();
    config.assistant.base_url = Some("api.groq.com/openai/v1".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.base_url"));
}

#[test]
fn catches_zero_context_budget() {
    let mut config = FellahConfig::default();
    config.conversation.max_context_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.max_context_tokens"));
}

#[test]
fn catches_empty_localization_source() {
    let mut config = FellahConfig::default();
    config.localization.terms = Some(vec![
        TermConfig {
            source: "water".into(),
            target: "l-ma".into(),
        },
        TermConfig {
            source: String::new(),
            target: "x".into(),
        },
    ]);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("localization.terms[1].source"));
}

#[test]
fn empty_terms_list_is_valid() {
    let mut config = FellahConfig::default();
    config.localization.terms = Some(Vec::new());
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = FellahConfig::default();
    config.assistant.temperature = 3.0;
    config.conversation.max_context_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.temperature"));
    assert!(err.contains("conversation.max_context_tokens"));
    assert!(err.contains("; "));
}

#[test]
fn catches_future_schema_version() {
    let mut config = FellahConfig::default();
    config.version = CONFIG_SCHEMA_VERSION + 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("version"));
}

#[test]
fn catches_zero_schema_version() {
    let mut config = FellahConfig::default();
    config.version = 0;
    assert!(validate(&config).is_err());
}

#[test]
fn default_config_has_no_warnings() {
    assert!(warnings(&FellahConfig::default()).is_empty());
}

#[test]
fn misspelled_language_warns_but_validates() {
    let config: FellahConfig = toml::from_str("[conversation]\nlanguage = \"frensh\"\n").unwrap();
    assert!(validate(&config).is_ok());

    let warnings = warnings(&config);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("conversation.language"));
    assert!(warnings[0].contains("french"));
}
