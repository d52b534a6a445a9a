//! Map surface port
//!
//! The map SDK is an external collaborator. The map controller drives it
//! through this interface and never holds SDK objects directly.

use std::fmt;

use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

/// Handle of a marker placed on a map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

/// Operations the application needs from a rendered map
///
/// All calls happen on the owning screen; implementations need not be
/// thread-safe beyond `Send`.
#[cfg_attr(test, automock)]
pub trait MapSurface: Send {
    /// Center the viewport on `coordinate` at `zoom_level`
    fn move_camera(&mut self, coordinate: Coordinate, zoom_level: f32);

    /// Place a marker and return its handle
    fn add_marker(&mut self, title: &str, subtitle: &str, coordinate: Coordinate) -> MarkerId;

    /// Remove a previously placed marker
    fn remove_marker(&mut self, marker: MarkerId);

    /// Open the info popup (title + subtitle) of a marker
    fn show_info_popup(&mut self, marker: MarkerId);
}
