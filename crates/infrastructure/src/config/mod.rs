//! Application configuration
//!
//! Split into focused sub-modules:
//! - `logging`: log level and output format
//! - `location`: fixed position for the static location provider
//!
//! The TMAP section reuses [`integration_tmap::TmapConfig`] as-is.

mod location;
mod logging;

use std::fmt;
use std::path::Path;

use integration_tmap::TmapConfig;
use serde::{Deserialize, Serialize};

pub use location::LocationConfig;
pub use logging::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig};

/// Base name of the optional configuration file (`placemark.toml`, ...)
pub const CONFIG_FILE_NAME: &str = "placemark";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "PLACEMARK";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// TMAP API configuration
    #[serde(default)]
    pub tmap: TmapConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fixed position reported by the static location provider (optional)
    #[serde(default)]
    pub location: Option<LocationConfig>,
}

impl AppConfig {
    /// Load configuration from environment and optional `placemark.*` file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `file` instead of the default file
    ///
    /// An explicitly given file must exist. Environment variables
    /// (e.g., `PLACEMARK__TMAP__API_KEY`) override file values.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?;

        let builder = match file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(CONFIG_FILE_NAME).required(false)),
        };

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Check that the loaded values are usable
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid section.
    pub fn validate(&self) -> Result<(), String> {
        self.tmap.validate().map_err(|e| format!("tmap: {e}"))?;
        if let Some(location) = &self.location {
            location.validate().map_err(|e| format!("location: {e}"))?;
        }
        Ok(())
    }

    /// Whether this is a production configuration
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
