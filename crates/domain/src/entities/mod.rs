//! Domain entities

mod place_candidate;
mod search_result;

pub use place_candidate::{BUILDING_NAME_UNAVAILABLE, PlaceCandidate, format_full_address};
pub use search_result::{ADDRESS_UNAVAILABLE, MY_LOCATION_LABEL, SearchResult};
