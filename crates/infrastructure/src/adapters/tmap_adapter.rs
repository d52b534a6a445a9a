//! TMAP adapter - Implements SearchPort and ReverseGeocodePort using integration_tmap

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ReverseGeocodePort, SearchPort};
use async_trait::async_trait;
use domain::entities::{PlaceCandidate, SearchResult};
use domain::value_objects::Coordinate;
use integration_tmap::{TmapApi, TmapClient, TmapConfig, TmapError};
use tracing::{debug, instrument};

/// Adapter for place search and reverse geocoding using the TMAP API
#[derive(Clone)]
pub struct TmapAdapter {
    client: Arc<dyn TmapApi>,
}

impl std::fmt::Debug for TmapAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmapAdapter")
            .field("client", &"TmapApi")
            .finish()
    }
}

impl TmapAdapter {
    /// Create an adapter around an existing client
    #[must_use]
    pub fn new(client: impl TmapApi + 'static) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &TmapConfig) -> Result<Self, ApplicationError> {
        let client = TmapClient::new(config).map_err(Self::map_error)?;
        Ok(Self::new(client))
    }

    /// Convert integration errors to application errors
    fn map_error(err: TmapError) -> ApplicationError {
        match err {
            TmapError::ConnectionFailed(e) => ApplicationError::Network(e),
            TmapError::Timeout => ApplicationError::Network(err.to_string()),
            TmapError::UnsuccessfulStatus { .. } | TmapError::EmptyBody => {
                ApplicationError::UnsuccessfulResponse(err.to_string())
            },
            TmapError::ParseError(e) => ApplicationError::MalformedResponse(e),
            TmapError::ConfigurationError(e) => ApplicationError::Configuration(e),
        }
    }
}

#[async_trait]
impl SearchPort for TmapAdapter {
    #[instrument(skip(self))]
    async fn search(&self, keyword: &str) -> Result<Vec<PlaceCandidate>, ApplicationError> {
        let candidates = self
            .client
            .search_pois(keyword)
            .await
            .map_err(Self::map_error)?;
        debug!(count = candidates.len(), "Search adapter returned candidates");
        Ok(candidates)
    }
}

#[async_trait]
impl ReverseGeocodePort for TmapAdapter {
    #[instrument(skip(self), fields(%coordinate))]
    async fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<SearchResult, ApplicationError> {
        self.client
            .reverse_geocode(coordinate)
            .await
            .map_err(Self::map_error)
    }
}
