//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod list_view_port;
mod location_port;
mod map_surface_port;
mod reverse_geocode_port;
mod search_port;

pub use list_view_port::{ListChange, ListView};
#[cfg(test)]
pub use location_port::MockLocationProviderPort;
pub use location_port::{LocationPermission, LocationProviderPort, UpdateRequest, WatchId};
#[cfg(test)]
pub use map_surface_port::MockMapSurface;
pub use map_surface_port::{MapSurface, MarkerId};
#[cfg(test)]
pub use reverse_geocode_port::MockReverseGeocodePort;
pub use reverse_geocode_port::ReverseGeocodePort;
#[cfg(test)]
pub use search_port::MockSearchPort;
pub use search_port::SearchPort;
