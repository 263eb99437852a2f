//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::FellahConfig;
use fellah_common::{ConfigError, Language};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_fellah_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[assistant]
model = "llama-3.3-70b-versatile"
temperature = 0.2

[conversation]
language = "english"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.model, "llama-3.3-70b-versatile");
    assert_eq!(config.assistant.temperature, 0.2);
    assert_eq!(config.conversation.language, Language::English);
    // Defaults preserved
    assert_eq!(config.assistant.max_tokens, 256);
    assert_eq!(config.conversation.max_context_tokens, 1000);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_still_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[conversation]\nmax_context_tokens = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.conversation.max_context_tokens, 0);
}

#[test]
fn default_template_parses_to_default_config() {
    let parsed: FellahConfig = toml::from_str(template::default_config_toml()).unwrap();
    let defaults = FellahConfig::default();
    assert_eq!(parsed.assistant.model, defaults.assistant.model);
    assert_eq!(
        parsed.conversation.max_context_tokens,
        defaults.conversation.max_context_tokens
    );
    assert_eq!(parsed.localization.greeting, defaults.localization.greeting);
    assert!(parsed.localization.terms.is_none());
    assert_eq!(parsed.version, crate::CONFIG_SCHEMA_VERSION);
}

#[test]
fn create_default_config_writes_nested_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("fellah").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.farm.crop, fellah_common::Crop::Cereals);
}

#[test]
fn default_config_path_ends_with_fellah_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("fellah/config.toml"));
    }
}
