//! Reverse geocoding port

use async_trait::async_trait;
use domain::entities::SearchResult;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving a coordinate into an address
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReverseGeocodePort: Send + Sync {
    /// Resolve `coordinate` into a "my location" result
    ///
    /// The returned result is named [`domain::MY_LOCATION_LABEL`]; its address
    /// is [`domain::ADDRESS_UNAVAILABLE`] when the service knows none.
    async fn reverse_geocode(&self, coordinate: Coordinate)
    -> Result<SearchResult, ApplicationError>;
}
