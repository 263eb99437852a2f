//! Configuration schema types for Fellah.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod conversation;
mod farm;
mod localization;
mod system;

pub use assistant::*;
pub use conversation::*;
pub use farm::*;
pub use localization::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Fellah.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FellahConfig {
    /// Schema version the file was written for.
    pub version: u32,
    pub assistant: AssistantConfig,
    pub conversation: ConversationConfig,
    pub farm: FarmConfig,
    pub localization: LocalizationConfig,
    pub logging: LoggingConfig,
}

impl Default for FellahConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_SCHEMA_VERSION,
            assistant: AssistantConfig::default(),
            conversation: ConversationConfig::default(),
            farm: FarmConfig::default(),
            localization: LocalizationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
