//! Driver configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the interactive driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Draw a separator line under row 1.
    #[serde(default = "default_separator")]
    separator: bool,

    /// Emit a JSON summary once the game is over.
    #[serde(default)]
    json_summary: bool,

    /// Tracing filter used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_separator() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            json_summary: false,
            log_filter: default_log_filter(),
        }
    }
}

impl DriverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(separator = config.separator, json = config.json_summary, "Config loaded");
        Ok(config)
    }

    /// Builds the effective configuration: file first, then flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if cli.no_separator {
            config.separator = false;
        }
        if cli.json {
            config.json_summary = true;
        }
        if let Some(filter) = &cli.log_filter {
            config.log_filter = filter.clone();
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
