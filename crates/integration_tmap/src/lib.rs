//! TMAP integration for Placemark
//!
//! Provides place keyword search and reverse geocoding via the
//! [SK Open API TMAP](https://openapi.sk.com) endpoints.
//!
//! # Architecture
//!
//! [`TmapApi`] defines the interface used by the infrastructure adapters,
//! implemented by [`TmapClient`]. All requests go through
//! [`TmapHttpClient`], which attaches the `appKey` header and, when enabled,
//! traces request URLs and response bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_tmap::{TmapApi, TmapClient, TmapConfig};
//!
//! let config = TmapConfig {
//!     api_key: "my-app-key".to_string(),
//!     ..TmapConfig::default()
//! };
//! let client = TmapClient::new(&config)?;
//!
//! let places = client.search_pois("Seoul Station").await?;
//! ```

mod client;
mod config;
mod error;
mod http;
mod models;

pub use client::{POI_SEARCH_PATH, REVERSE_GEOCODE_PATH, TmapApi, TmapClient};
pub use config::{MAX_SEARCH_COUNT, TmapConfig};
pub use error::TmapError;
pub use http::{APP_KEY_HEADER, TmapHttpClient};
pub use models::{AddressInfo, Poi, PoiSearchResponse, Pois, ReverseGeocodeResponse, SearchPoiInfo};
