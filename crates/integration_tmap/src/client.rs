//! TMAP API client
//!
//! POI keyword search and reverse geocoding on top of [`TmapHttpClient`].

use async_trait::async_trait;
use domain::entities::{PlaceCandidate, SearchResult};
use domain::value_objects::Coordinate;
use tracing::{debug, instrument};

use crate::config::TmapConfig;
use crate::error::TmapError;
use crate::http::TmapHttpClient;
use crate::models::{PoiSearchResponse, ReverseGeocodeResponse};

/// Path of the POI search endpoint
pub const POI_SEARCH_PATH: &str = "/tmap/pois";

/// Path of the reverse geocoding endpoint
pub const REVERSE_GEOCODE_PATH: &str = "/tmap/geo/reversegeocoding";

const API_VERSION: &str = "1";
const COORD_TYPE: &str = "WGS84GEO";
const ADDRESS_TYPE: &str = "A10";

/// Operations offered by the TMAP API
#[async_trait]
pub trait TmapApi: Send + Sync {
    /// Search places matching `keyword`
    ///
    /// Candidates are returned in API order.
    async fn search_pois(&self, keyword: &str) -> Result<Vec<PlaceCandidate>, TmapError>;

    /// Resolve `coordinate` into a "my location" result
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<SearchResult, TmapError>;
}

/// TMAP client backed by HTTP
#[derive(Debug, Clone)]
pub struct TmapClient {
    http: TmapHttpClient,
    search_count: u16,
}

impl TmapClient {
    /// Create a new TMAP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TmapConfig) -> Result<Self, TmapError> {
        config.validate().map_err(TmapError::ConfigurationError)?;
        Ok(Self {
            http: TmapHttpClient::new(config)?,
            search_count: config.search_count,
        })
    }

    fn search_query(&self, keyword: &str) -> Vec<(&'static str, String)> {
        vec![
            ("version", API_VERSION.to_string()),
            // TMAP's name for the keyword parameter
            ("searchKeyword", keyword.to_string()),
            ("count", self.search_count.to_string()),
            ("page", "1".to_string()),
            ("searchType", "all".to_string()),
            ("resCoordType", COORD_TYPE.to_string()),
            ("reqCoordType", COORD_TYPE.to_string()),
            ("multiPoint", "N".to_string()),
            ("poiGroupYn", "N".to_string()),
        ]
    }

    fn reverse_geocode_query(coordinate: Coordinate) -> Vec<(&'static str, String)> {
        vec![
            ("version", API_VERSION.to_string()),
            ("lat", coordinate.latitude().to_string()),
            ("lon", coordinate.longitude().to_string()),
            ("coordType", COORD_TYPE.to_string()),
            ("addressType", ADDRESS_TYPE.to_string()),
        ]
    }
}

#[async_trait]
impl TmapApi for TmapClient {
    #[instrument(skip(self))]
    async fn search_pois(&self, keyword: &str) -> Result<Vec<PlaceCandidate>, TmapError> {
        let response: PoiSearchResponse = self
            .http
            .get_json(POI_SEARCH_PATH, &self.search_query(keyword))
            .await?;

        let total = response.search_poi_info.total_count;
        let candidates = response.into_candidates();
        debug!(count = candidates.len(), ?total, "POI search completed");
        Ok(candidates)
    }

    #[instrument(skip(self), fields(%coordinate))]
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<SearchResult, TmapError> {
        let response: ReverseGeocodeResponse = self
            .http
            .get_json(REVERSE_GEOCODE_PATH, &Self::reverse_geocode_query(coordinate))
            .await?;

        let full_address = response.into_full_address()?;
        debug!(found = full_address.is_some(), "Reverse geocoding completed");
        Ok(SearchResult::current_location(full_address, coordinate))
    }
}
