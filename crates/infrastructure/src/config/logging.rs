//! Logging configuration

use serde::{Deserialize, Serialize};

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Filter used when no level is configured
///
/// Debug builds also let the TMAP request URL and response body traces
/// through, which `integration_tmap` emits at debug level.
pub const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "info,integration_tmap::http=debug"
} else {
    "info"
};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info",
    /// "integration_tmap=debug")
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn test_default_level_matches_build() {
        assert_eq!(
            DEFAULT_LOG_LEVEL.contains("integration_tmap::http=debug"),
            cfg!(debug_assertions)
        );
        assert!(DEFAULT_LOG_LEVEL.starts_with("info"));
    }

    #[test]
    fn test_deserialize_format() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    }
}
