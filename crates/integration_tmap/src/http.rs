//! HTTP transport shared by the TMAP endpoints
//!
//! Every request carries the `appKey` header. When body logging is enabled
//! the full request URL and the raw response body are traced at debug level.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::TmapConfig;
use crate::error::TmapError;

/// Header carrying the application key
pub const APP_KEY_HEADER: &str = "appkey";

/// HTTP client preconfigured for the TMAP gateway
#[derive(Debug, Clone)]
pub struct TmapHttpClient {
    client: Client,
    base_url: String,
    log_bodies: bool,
}

impl TmapHttpClient {
    /// Create a new HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or not a valid header value,
    /// or if the HTTP client cannot be built.
    pub fn new(config: &TmapConfig) -> Result<Self, TmapError> {
        if config.api_key.trim().is_empty() {
            return Err(TmapError::ConfigurationError(
                "TMAP api_key is required".to_string(),
            ));
        }

        let mut app_key = HeaderValue::from_str(config.api_key.trim())
            .map_err(|e| TmapError::ConfigurationError(format!("Invalid api_key: {e}")))?;
        app_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(APP_KEY_HEADER), app_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TmapError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            log_bodies: config.log_bodies,
        })
    }

    /// Whether request URLs and response bodies are traced
    #[must_use]
    pub const fn logs_bodies(&self) -> bool {
        self.log_bodies
    }

    /// GET `path` with `query` and decode the JSON answer
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, empty bodies and
    /// undecodable bodies.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmapError> {
        let url = format!("{}{path}", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(query)
            .build()
            .map_err(|e| TmapError::ConfigurationError(e.to_string()))?;

        if self.log_bodies {
            debug!(method = "GET", url = %request.url(), "--> TMAP request");
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| TmapError::from_reqwest(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TmapError::from_reqwest(&e))?;

        if self.log_bodies {
            debug!(status = status.as_u16(), body = %body, "<-- TMAP response");
        }

        if !status.is_success() {
            return Err(TmapError::UnsuccessfulStatus {
                status: status.as_u16(),
            });
        }

        if body.trim().is_empty() {
            return Err(TmapError::EmptyBody);
        }

        serde_json::from_str(&body).map_err(|e| TmapError::ParseError(e.to_string()))
    }
}
