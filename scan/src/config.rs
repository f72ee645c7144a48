//! Scan configuration options.

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// The default height of a wall patch. Textures this tall never wrap.
pub const WALL_UNIT: i32 = 128;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Texture height that is treated as incapable of tutti-frutti
    pub wall_unit: i32,
    /// Run the medusa pass
    pub medusa: bool,
    /// Run the tutti-frutti pass
    pub tutti_frutti: bool,
    /// Scan maps on the rayon thread pool. Report order is unaffected.
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            wall_unit: WALL_UNIT,
            medusa: true,
            tutti_frutti: true,
            parallel: false,
        }
    }
}

impl ScanConfig {
    /// Parse a TOML config. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ScanError> {
        toml::from_str(s).map_err(|e| ScanError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ScanError> {
        toml::to_string_pretty(self).map_err(|e| ScanError::Config(e.to_string()))
    }
}
