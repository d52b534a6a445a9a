//! Map screen
//!
//! Shows the result handed off by the search screen and, on request, the
//! user's current location resolved to an address. Location updates and
//! reverse geocoding completions are drained through
//! [`MapScreen::process_next`].

use std::sync::Arc;

use domain::entities::SearchResult;
use domain::errors::DomainError;
use domain::value_objects::Coordinate;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{LocationProviderPort, MapSurface, ReverseGeocodePort};
use crate::services::location_flow::{LocationRequestFlow, LocationRequestOutcome};
use crate::services::map_controller::MapController;
use crate::services::screen_scope::ScreenScope;

/// Something the map screen handled
#[derive(Debug)]
pub enum MapScreenEvent {
    /// The first location update arrived; the camera moved there and its
    /// address is being resolved
    CurrentLocationFocused(Coordinate),
    /// The resolved current location replaced the active marker
    MarkerPlaced(SearchResult),
    /// Reverse geocoding failed; the map was left as it was
    GeocodeFailed(ApplicationError),
    /// The location provider closed the subscription before any update
    LocationUnavailable,
}

type GeocodeOutcome = Result<SearchResult, ApplicationError>;

/// Controller of the map screen
pub struct MapScreen<S: MapSurface> {
    map: MapController<S>,
    location: LocationRequestFlow,
    geocoder: Arc<dyn ReverseGeocodePort>,
    scope: ScreenScope<GeocodeOutcome>,
}

impl<S: MapSurface + std::fmt::Debug> std::fmt::Debug for MapScreen<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapScreen")
            .field("map", &self.map)
            .field("location", &self.location)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<S: MapSurface> MapScreen<S> {
    /// Open the map screen for the hand-off `result`
    ///
    /// Fails when no result was handed off. The result is shown as soon as
    /// the map surface is ready.
    pub fn new(
        handoff: Option<SearchResult>,
        geocoder: Arc<dyn ReverseGeocodePort>,
        location: Arc<dyn LocationProviderPort>,
    ) -> Result<Self, ApplicationError> {
        let result = handoff.ok_or_else(|| DomainError::missing_handoff("search result"))?;
        debug!(title = result.building_name(), "Opening map screen");

        let mut map = MapController::new();
        map.show_result(result);

        Ok(Self {
            map,
            location: LocationRequestFlow::new(location),
            geocoder,
            scope: ScreenScope::new("map"),
        })
    }

    /// Attach the map surface once it is ready
    pub fn on_map_ready(&mut self, surface: S) {
        self.map.on_map_ready(surface);
    }

    /// Handle the "current location" action
    ///
    /// A disposed screen reports [`LocationRequestOutcome::ProviderDisabled`]
    /// without touching the provider.
    pub async fn request_current_location(&mut self) -> LocationRequestOutcome {
        if self.scope.is_disposed() {
            debug!("Map screen disposed, ignoring location request");
            return LocationRequestOutcome::ProviderDisabled;
        }
        self.location.request_current_location().await
    }

    /// Handle a location update
    ///
    /// Only the first update after a request is acted upon; it returns
    /// `true`.
    pub fn on_location_update(&mut self, coordinate: Coordinate) -> bool {
        match self.location.on_location_update(coordinate) {
            Some(coordinate) => {
                self.show_current_location(coordinate);
                true
            },
            None => false,
        }
    }

    /// Move the camera to `coordinate` and resolve its address
    #[instrument(skip_all, fields(%coordinate))]
    pub fn show_current_location(&mut self, coordinate: Coordinate) {
        if self.scope.is_disposed() {
            debug!("Map screen disposed, ignoring current location");
            return;
        }
        self.map.focus(coordinate);

        let geocoder = Arc::clone(&self.geocoder);
        self.scope
            .launch(async move { geocoder.reverse_geocode(coordinate).await });
    }

    /// Apply a reverse geocoding completion
    pub fn apply_geocode(&mut self, outcome: GeocodeOutcome) -> Result<(), ApplicationError> {
        match outcome {
            Ok(result) => {
                info!(address = result.full_address(), "Current location resolved");
                self.map.show_result(result);
                Ok(())
            },
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed");
                Err(e)
            },
        }
    }

    /// Wait for the next location update or geocoding completion and apply it
    ///
    /// Returns `None` once nothing is pending.
    pub async fn process_next(&mut self) -> Option<MapScreenEvent> {
        if self.scope.is_disposed() {
            return None;
        }

        let watching = self.location.is_watching();
        let geocoding = !self.scope.is_idle();
        if !watching && !geocoding {
            return None;
        }

        tokio::select! {
            update = self.location.next_update(), if watching => {
                match update {
                    Some(coordinate) => {
                        self.on_location_update(coordinate);
                        Some(MapScreenEvent::CurrentLocationFocused(coordinate))
                    },
                    None => {
                        warn!("Location updates ended before the first fix");
                        self.location.stop();
                        Some(MapScreenEvent::LocationUnavailable)
                    },
                }
            },
            outcome = self.scope.next_outcome(), if geocoding => {
                let outcome = outcome?;
                Some(match self.apply_geocode(outcome) {
                    Ok(()) => match self.map.active_result() {
                        Some(result) => MapScreenEvent::MarkerPlaced(result.clone()),
                        None => return None,
                    },
                    Err(e) => MapScreenEvent::GeocodeFailed(e),
                })
            },
        }
    }

    /// The map controller
    #[must_use]
    pub const fn map(&self) -> &MapController<S> {
        &self.map
    }

    /// Whether a location request is waiting for its first update
    #[must_use]
    pub const fn is_watching_location(&self) -> bool {
        self.location.is_watching()
    }

    /// Cancel pending work and stop location updates
    pub fn dispose(&mut self) {
        self.scope.dispose();
        self.location.stop();
    }
}
