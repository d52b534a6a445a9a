//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the TMAP adapter, the static location provider, configuration
//! loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, ENV_PREFIX, Environment, LocationConfig,
    LogFormat, LoggingConfig,
};
pub use telemetry::{TelemetryError, init_tracing};
