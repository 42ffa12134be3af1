//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONSTELLATION_COST` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use constellation_cost::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading {}", config.io.input_path);
//! ```

mod error;
mod features;
mod io;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use io::IoConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Input and output documents
    #[serde(default)]
    pub io: IoConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONSTELLATION_COST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONSTELLATION_COST__IO__INPUT_PATH=mission.yaml` -> `io.input_path = mission.yaml`
    /// - `CONSTELLATION_COST__FEATURES__STRICT_DIAGNOSTICS=true` -> `features.strict_diagnostics = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONSTELLATION_COST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a path is empty, the output would
    /// overwrite the input, or the log filter is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.io.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
