//! Fellah configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so partial configs (or an empty file) work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fellah_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.assistant.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FellahConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use fellah_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<FellahConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<FellahConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
