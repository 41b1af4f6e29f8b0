//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::AppError;
use crate::AppResult;
use crate::models::Tariff;

/// Environment variable prefix, e.g. `PHONEBILL__TARIFF__PEAK_RATE`
const ENV_PREFIX: &str = "PHONEBILL";

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub tariff: Tariff,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config files
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("tariff.peak_rate", "1.00")?
            .set_default("tariff.off_peak_rate", "0.50")?
            .set_default("tariff.reduced_rate", "0.20")?
            .set_default("tariff.peak_start_hour", 8)?
            .set_default("tariff.peak_end_hour", 16)?
            .set_default("tariff.free_minutes", 5)?
            .set_default("logging.level", "info")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with PHONEBILL_ prefix
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> AppResult<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<(), AppError> {
        self.tariff.validate()
    }
}
