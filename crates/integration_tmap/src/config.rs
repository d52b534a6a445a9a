//! TMAP client configuration

use serde::{Deserialize, Serialize};

/// Upper bound of the `count` query parameter accepted by the POI search
pub const MAX_SEARCH_COUNT: u16 = 200;

/// Configuration for the TMAP Open API
#[derive(Clone, Serialize, Deserialize)]
pub struct TmapConfig {
    /// Base URL of the SK Open API gateway
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application key sent as the `appKey` header
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds (none when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Number of POIs requested per search
    #[serde(default = "default_search_count")]
    pub search_count: u16,

    /// Log request URLs and response bodies at debug level
    #[serde(default = "default_log_bodies")]
    pub log_bodies: bool,
}

fn default_base_url() -> String {
    "https://apis.openapi.sk.com".to_string()
}

const fn default_search_count() -> u16 {
    20
}

const fn default_log_bodies() -> bool {
    cfg!(debug_assertions)
}

impl Default for TmapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: None,
            search_count: default_search_count(),
            log_bodies: default_log_bodies(),
        }
    }
}

impl std::fmt::Debug for TmapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmapConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("search_count", &self.search_count)
            .field("log_bodies", &self.log_bodies)
            .finish()
    }
}

impl TmapConfig {
    /// Create a configuration pointing at `base_url`, suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: "test-app-key".to_string(),
            timeout_secs: Some(5),
            log_bodies: true,
            ..Default::default()
        }
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.search_count == 0 {
            return Err("search_count must be greater than 0".to_string());
        }

        if self.search_count > MAX_SEARCH_COUNT {
            return Err(format!("search_count must be {MAX_SEARCH_COUNT} or less"));
        }

        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
