//! Mapper configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How a result column with no bound field is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Log at `warn`.
    #[default]
    Warn,
    /// Log at `debug`.
    Debug,
    /// Drop silently.
    Ignore,
}

/// Options shared by every scan and projection a [`Session`](crate::Session)
/// performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub unmapped_columns: UnmappedPolicy,
    /// Prefix projected columns of embedded records with the record name.
    pub qualify_columns: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            unmapped_columns: UnmappedPolicy::Warn,
            qualify_columns: true,
        }
    }
}

impl MapperConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
