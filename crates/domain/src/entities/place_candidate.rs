//! Raw place candidate as returned by the keyword search

use serde::{Deserialize, Serialize};

use crate::entities::SearchResult;
use crate::value_objects::Coordinate;

/// Shown instead of a building name when the candidate has none
pub const BUILDING_NAME_UNAVAILABLE: &str = "building name unavailable";

/// A place returned by the search endpoint before formatting
///
/// All address parts are optional; the search provider leaves out whatever
/// it does not know about a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Place or building name
    pub name: Option<String>,
    /// Top-level administrative area (province / metropolitan city)
    pub upper_addr_name: Option<String>,
    /// Second-level administrative area (city / district)
    pub middle_addr_name: Option<String>,
    /// Third-level administrative area (neighbourhood)
    pub lower_addr_name: Option<String>,
    /// Detailed area (village / block)
    pub detail_addr_name: Option<String>,
    /// Main lot number
    pub first_no: Option<String>,
    /// Sub lot number
    pub second_no: Option<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl PlaceCandidate {
    /// Position of the candidate
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Display name, falling back to [`BUILDING_NAME_UNAVAILABLE`]
    #[must_use]
    pub fn building_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| BUILDING_NAME_UNAVAILABLE.to_string())
    }

    /// Full address line built with [`format_full_address`]
    #[must_use]
    pub fn full_address(&self) -> String {
        format_full_address(self)
    }

    /// Convert into the display-ready record used by both screens
    #[must_use]
    pub fn into_search_result(self) -> SearchResult {
        SearchResult::new(self.building_name(), self.full_address(), self.location())
    }
}

impl From<PlaceCandidate> for SearchResult {
    fn from(candidate: PlaceCandidate) -> Self {
        candidate.into_search_result()
    }
}

/// Build the address line of a candidate
///
/// The four administrative parts and the main lot number are always joined
/// with single spaces, an absent part contributing an empty string. The sub
/// lot number is appended only when it is present and not blank.
#[must_use]
pub fn format_full_address(candidate: &PlaceCandidate) -> String {
    fn part(value: Option<&str>) -> &str {
        value.map_or("", str::trim)
    }

    let mut segments = vec![
        part(candidate.upper_addr_name.as_deref()),
        part(candidate.middle_addr_name.as_deref()),
        part(candidate.lower_addr_name.as_deref()),
        part(candidate.detail_addr_name.as_deref()),
        part(candidate.first_no.as_deref()),
    ];

    let second_no = part(candidate.second_no.as_deref());
    if !second_no.is_empty() {
        segments.push(second_no);
    }

    segments.join(" ")
}
