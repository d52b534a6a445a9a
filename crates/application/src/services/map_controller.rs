//! Map controller
//!
//! Owns the viewport and the single active marker of the map screen. The map
//! surface only becomes available asynchronously; everything requested
//! before that is queued and replayed once the surface reports readiness.

use domain::entities::SearchResult;
use domain::value_objects::Coordinate;
use tracing::debug;

use crate::ports::{MapSurface, MarkerId};

/// Zoom level used whenever the camera is moved to a place
pub const CAMERA_ZOOM_LEVEL: f32 = 17.0;

#[derive(Debug, Clone, PartialEq)]
enum MapCommand {
    ShowResult(SearchResult),
    Focus(Coordinate),
}

#[derive(Debug)]
enum MapState<S> {
    Uninitialized { pending: Vec<MapCommand> },
    Ready { surface: S },
}

/// Controller of the map viewport and its active marker
#[derive(Debug)]
pub struct MapController<S: MapSurface> {
    state: MapState<S>,
    active_marker: Option<MarkerId>,
    active_result: Option<SearchResult>,
}

impl<S: MapSurface> Default for MapController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MapSurface> MapController<S> {
    /// Create a controller waiting for its surface
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: MapState::Uninitialized {
                pending: Vec::new(),
            },
            active_marker: None,
            active_result: None,
        }
    }

    /// Whether the surface has reported readiness
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, MapState::Ready { .. })
    }

    /// Number of operations waiting for the surface
    #[must_use]
    pub fn pending_operations(&self) -> usize {
        match &self.state {
            MapState::Uninitialized { pending } => pending.len(),
            MapState::Ready { .. } => 0,
        }
    }

    /// Attach the surface and replay queued operations in order
    ///
    /// A second readiness report replaces the surface; the marker handle of
    /// the old surface is dropped with it.
    pub fn on_map_ready(&mut self, surface: S) {
        let previous = std::mem::replace(&mut self.state, MapState::Ready { surface });
        let pending = match previous {
            MapState::Uninitialized { pending } => pending,
            MapState::Ready { .. } => {
                self.active_marker = None;
                Vec::new()
            },
        };

        debug!(pending = pending.len(), "Map surface ready");
        for command in pending {
            self.execute(command);
        }
    }

    /// Move the camera to `result` and make it the active marker
    pub fn show_result(&mut self, result: SearchResult) {
        self.dispatch(MapCommand::ShowResult(result));
    }

    /// Move the camera to `coordinate` without touching the marker
    pub fn focus(&mut self, coordinate: Coordinate) {
        self.dispatch(MapCommand::Focus(coordinate));
    }

    /// Result currently pinned by the active marker
    #[must_use]
    pub const fn active_result(&self) -> Option<&SearchResult> {
        self.active_result.as_ref()
    }

    /// Handle of the active marker
    #[must_use]
    pub const fn active_marker(&self) -> Option<MarkerId> {
        self.active_marker
    }

    /// The attached surface, once ready
    #[must_use]
    pub const fn surface(&self) -> Option<&S> {
        match &self.state {
            MapState::Ready { surface } => Some(surface),
            MapState::Uninitialized { .. } => None,
        }
    }

    fn dispatch(&mut self, command: MapCommand) {
        match &mut self.state {
            MapState::Uninitialized { pending } => {
                debug!(?command, "Map not ready, deferring");
                pending.push(command);
            },
            MapState::Ready { .. } => self.execute(command),
        }
    }

    fn execute(&mut self, command: MapCommand) {
        let MapState::Ready { surface } = &mut self.state else {
            return;
        };

        match command {
            MapCommand::Focus(coordinate) => {
                surface.move_camera(coordinate, CAMERA_ZOOM_LEVEL);
            },
            MapCommand::ShowResult(result) => {
                surface.move_camera(result.location(), CAMERA_ZOOM_LEVEL);
                if let Some(previous) = self.active_marker.take() {
                    surface.remove_marker(previous);
                }
                let marker = surface.add_marker(
                    result.building_name(),
                    result.full_address(),
                    result.location(),
                );
                surface.show_info_popup(marker);
                debug!(%marker, title = result.building_name(), "Marker placed");
                self.active_marker = Some(marker);
                self.active_result = Some(result);
            },
        }
    }
}
