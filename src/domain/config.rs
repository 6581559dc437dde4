//! Parse configuration
//!
//! The description format conventions (done markers, comment markers,
//! indentation width) are injected into the parser rather than hard-coded,
//! so alternate conventions can be configured per project via `mikado.toml`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the optional per-directory configuration file
pub const CONFIG_FILE: &str = "mikado.toml";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Conventions used when parsing a mikado description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Leading tokens that mark a task as completed
    pub done_markers: Vec<String>,

    /// Markers that turn a whole line into a comment, wherever they appear
    pub comment_markers: Vec<String>,

    /// Number of spaces per nesting level (tabs expand to this many spaces)
    pub indent_width: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            done_markers: ["x", "X", "v", "V"].map(String::from).to_vec(),
            comment_markers: ["#", "//"].map(String::from).to_vec(),
            indent_width: 4,
        }
    }
}

impl ParseConfig {
    /// Parses a configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::Invalid(
                "indent_width must be at least 1".to_string(),
            ));
        }

        if self.done_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::Invalid(
                "done_markers must not contain empty strings".to_string(),
            ));
        }

        if self.comment_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::Invalid(
                "comment_markers must not contain empty strings".to_string(),
            ));
        }

        Ok(())
    }
}
