//! System configuration types: logging.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive covering all Fellah crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "fellah=trace",
            LogLevel::Debug => "fellah=debug",
            LogLevel::Info => "fellah=info",
            LogLevel::Warning => "fellah=warn",
            LogLevel::Error => "fellah=error",
        }
    }
}

/// Case-insensitive; accepts both `warn` and `warning`.
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!(
                "unknown log level '{s}' (expected one of: trace, debug, info, warning, error)"
            )),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
