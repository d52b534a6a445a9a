//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport-level failure (connection refused, DNS, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status or without a body
    #[error("Unsuccessful response: {0}")]
    UnsuccessfulResponse(String),

    /// The service answered with a body that could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error was caused by the transport
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if the remote service answered but without usable data
    pub const fn is_unsuccessful_response(&self) -> bool {
        matches!(self, Self::UnsuccessfulResponse(_) | Self::MalformedResponse(_))
    }
}
