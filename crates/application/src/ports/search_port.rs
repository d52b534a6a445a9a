//! Keyword search port
//!
//! Defines the interface for looking places up by keyword. The TMAP adapter
//! in the infrastructure layer implements this port.

use async_trait::async_trait;
use domain::entities::PlaceCandidate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for keyword place search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchPort: Send + Sync {
    /// Search places matching `keyword`
    ///
    /// A transport failure is reported as [`ApplicationError::Network`]; a
    /// non-success status or an empty body as
    /// [`ApplicationError::UnsuccessfulResponse`].
    async fn search(&self, keyword: &str) -> Result<Vec<PlaceCandidate>, ApplicationError>;
}
