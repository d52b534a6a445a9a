//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A screen was opened without the value it requires from the previous one
    #[error("Missing hand-off data: {0}")]
    MissingHandoff(String),

    /// Coordinates outside the valid ranges
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a missing hand-off error
    pub fn missing_handoff(what: impl Into<String>) -> Self {
        Self::MissingHandoff(what.into())
    }
}
