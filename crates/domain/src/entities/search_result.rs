//! Display-ready place record shared by the list and map screens

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// Shown when a reverse-geocode answer carries no address
pub const ADDRESS_UNAVAILABLE: &str = "address unavailable";

/// Building name given to the resolved current location
pub const MY_LOCATION_LABEL: &str = "my location";

/// A formatted place, ready to be listed or pinned on the map
///
/// Two results describe the same list row when their `full_address` matches;
/// see [`SearchResult::is_same_item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    building_name: String,
    full_address: String,
    location: Coordinate,
}

impl SearchResult {
    /// Create a new search result
    #[must_use]
    pub fn new(
        building_name: impl Into<String>,
        full_address: impl Into<String>,
        location: Coordinate,
    ) -> Self {
        Self {
            building_name: building_name.into(),
            full_address: full_address.into(),
            location,
        }
    }

    /// Result describing the user's own position
    ///
    /// `full_address` falls back to [`ADDRESS_UNAVAILABLE`] when the geocoder
    /// returned none.
    #[must_use]
    pub fn current_location(full_address: Option<String>, location: Coordinate) -> Self {
        Self::new(
            MY_LOCATION_LABEL,
            full_address.unwrap_or_else(|| ADDRESS_UNAVAILABLE.to_string()),
            location,
        )
    }

    /// Marker title / list row title
    #[must_use]
    pub fn building_name(&self) -> &str {
        &self.building_name
    }

    /// Marker subtitle / list row subtitle, also the row identity
    #[must_use]
    pub fn full_address(&self) -> &str {
        &self.full_address
    }

    /// Position of the place
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.location
    }

    /// Whether both values describe the same list row
    #[must_use]
    pub fn is_same_item(&self, other: &Self) -> bool {
        self.full_address == other.full_address
    }
}
