//! Farm profile used to frame user questions.

use fellah_common::{Crop, Region};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    /// Prefix each question with the farmer's region and crop.
    pub enabled: bool,
    pub region: Region,
    pub crop: Crop,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            region: Region::SoussMassa,
            crop: Crop::Cereals,
        }
    }
}
