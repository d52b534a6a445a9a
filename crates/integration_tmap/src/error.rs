//! TMAP error types

use thiserror::Error;

/// Errors that can occur while talking to the TMAP API
#[derive(Debug, Error)]
pub enum TmapError {
    /// The request never got an answer (DNS, refused connection, reset, ...)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request timed out
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status
    #[error("Unsuccessful response: HTTP {status}")]
    UnsuccessfulStatus {
        /// HTTP status code
        status: u16,
    },

    /// The server answered successfully but without a body
    #[error("Response body is empty")]
    EmptyBody,

    /// The body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The client could not be configured
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl TmapError {
    /// Returns true if the request failed before any answer was received
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout)
    }

    pub(crate) fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::ConnectionFailed(error.to_string())
        }
    }
}
