//! Static location configuration

use domain::value_objects::{Coordinate, InvalidCoordinates};
use serde::{Deserialize, Serialize};

/// Position reported by the static location provider
///
/// Configured as a table: `[location] latitude = 37.5563, longitude = 126.9723`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl LocationConfig {
    /// Convert to a range-checked coordinate
    pub fn to_coordinate(&self) -> Result<Coordinate, InvalidCoordinates> {
        Coordinate::validated(self.latitude, self.longitude)
    }

    /// Validate the coordinate range
    pub fn validate(&self) -> Result<(), String> {
        self.to_coordinate().map(|_| ()).map_err(|e| e.to_string())
    }
}
