//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod static_location_adapter;
mod tmap_adapter;

pub use static_location_adapter::StaticLocationProvider;
pub use tmap_adapter::TmapAdapter;
