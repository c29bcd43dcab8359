//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAPABILITY_COMPARE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use capability_compare::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Comparing against {}", config.defaults.competitor);
//! ```

mod defaults;
mod error;
mod reference;

pub use defaults::DefaultsConfig;
pub use error::{ConfigError, ValidationError};
pub use reference::ReferenceConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields the built-in
/// demo setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Rust log filter directive (`RUST_LOG` takes precedence)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,

    /// Reference data location
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Default selection
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAPABILITY_COMPARE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAPABILITY_COMPARE__LOG_LEVEL=debug` -> `log_level = debug`
    /// - `CAPABILITY_COMPARE__REFERENCE__DATA_PATH=...` -> `reference.data_path = ...`
    /// - `CAPABILITY_COMPARE__DEFAULTS__PRODUCTS=a,b` -> `defaults.products = a,b`
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
                    .prefix("CAPABILITY_COMPARE")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("log_level"));
        }
        self.reference.validate()?;
        self.defaults.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            reference: ReferenceConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info,capability_compare=debug".to_string()
}
