//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; `WAGERBOOK_DATA_FILE` in the
//! environment (or a `.env` file) overrides the ledger path.
//!
//! # Example
//!
//! ```no_run
//! use wagerbook::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::ledger::LedgerConfig;
use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `ledger.data_file`.
pub const DATA_FILE_ENV: &str = "WAGERBOOK_DATA_FILE";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Ledger storage and policy.
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise start from the defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(DATA_FILE_ENV) {
            self.ledger.data_file = path;
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.ledger.data_file.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "data_file" }.into());
        }
        if self.ledger.starting_balance < 0 {
            return Err(ConfigError::InvalidValue {
                field: "starting_balance",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.ledger.commit_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "commit_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.ledger.leaderboard_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "leaderboard_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"json\" or \"pretty\"".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
