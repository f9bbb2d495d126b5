//! TFT translation configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// TFT translation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TftConfig {
    /// Log level for packet filter components dropped during translation
    pub skip_report_level: log::Level,
}

impl Default for TftConfig {
    fn default() -> Self {
        TftConfig {
            skip_report_level: log::Level::Info,
        }
    }
}

impl TftConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
