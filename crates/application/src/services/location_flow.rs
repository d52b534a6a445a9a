//! Current location request flow
//!
//! Checks that the provider is on, asks for permission when needed and
//! subscribes to location updates. Only the first update after a request is
//! consumed; the subscription is removed as soon as it arrives.

use std::sync::Arc;
use std::time::Duration;

use domain::value_objects::Coordinate;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::ports::{LocationPermission, LocationProviderPort, UpdateRequest, WatchId};

/// Minimum time between two location updates
pub const LOCATION_UPDATE_INTERVAL: Duration = Duration::from_millis(1500);

/// Minimum displacement in meters between two location updates
pub const LOCATION_MIN_DISTANCE_M: f32 = 100.0;

/// What a current-location request ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRequestOutcome {
    /// The location provider is switched off; nothing was started
    ProviderDisabled,
    /// At least one requested permission was denied; nothing was started
    PermissionDenied,
    /// Updates were requested; the first one will be consumed
    Watching(WatchId),
    /// A previous request is still waiting for its first update
    AlreadyWatching(WatchId),
}

struct ActiveWatch {
    id: WatchId,
    updates: UnboundedReceiver<Coordinate>,
}

/// Single-shot wrapper around the recurring location updates
pub struct LocationRequestFlow {
    provider: Arc<dyn LocationProviderPort>,
    watch: Option<ActiveWatch>,
}

impl std::fmt::Debug for LocationRequestFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationRequestFlow")
            .field("watch", &self.watch.as_ref().map(|w| w.id))
            .finish_non_exhaustive()
    }
}

impl LocationRequestFlow {
    /// Create an idle flow
    #[must_use]
    pub fn new(provider: Arc<dyn LocationProviderPort>) -> Self {
        Self {
            provider,
            watch: None,
        }
    }

    /// Whether a request is waiting for its first update
    #[must_use]
    pub const fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Start a current-location request
    pub async fn request_current_location(&mut self) -> LocationRequestOutcome {
        if let Some(watch) = &self.watch {
            return LocationRequestOutcome::AlreadyWatching(watch.id);
        }

        if !self.provider.is_provider_enabled() {
            debug!("Location provider disabled, ignoring request");
            return LocationRequestOutcome::ProviderDisabled;
        }

        let has_any_permission = LocationPermission::ALL
            .iter()
            .any(|permission| self.provider.has_permission(*permission));

        if !has_any_permission {
            let answers = self
                .provider
                .request_permissions(&LocationPermission::ALL)
                .await;
            let all_granted = LocationPermission::ALL
                .iter()
                .all(|permission| answers.get(permission).copied().unwrap_or(false));
            if !all_granted {
                info!("Location permission denied");
                return LocationRequestOutcome::PermissionDenied;
            }
        }

        let (sink, updates) = mpsc::unbounded_channel();
        let request = UpdateRequest {
            min_interval: LOCATION_UPDATE_INTERVAL,
            min_distance_m: LOCATION_MIN_DISTANCE_M,
        };
        let id = self.provider.request_updates(request, sink);
        debug!(%id, "Watching location");
        self.watch = Some(ActiveWatch { id, updates });

        LocationRequestOutcome::Watching(id)
    }

    /// Wait for the next update of the active watch
    ///
    /// Never resolves while no request is active. Resolves to `None` when
    /// the provider closed the subscription.
    pub async fn next_update(&mut self) -> Option<Coordinate> {
        match &mut self.watch {
            Some(watch) => watch.updates.recv().await,
            None => std::future::pending().await,
        }
    }

    /// Consume a location update
    ///
    /// The first update after a request stops the watch and is returned;
    /// any later update is ignored until a new request.
    pub fn on_location_update(&mut self, coordinate: Coordinate) -> Option<Coordinate> {
        if self.stop() {
            Some(coordinate)
        } else {
            debug!(%coordinate, "Ignoring location update without an active request");
            None
        }
    }

    /// Remove the active watch, if any; returns whether one was active
    pub fn stop(&mut self) -> bool {
        match self.watch.take() {
            Some(watch) => {
                self.provider.remove_updates(watch.id);
                debug!(id = %watch.id, "Stopped watching location");
                true
            },
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::ports::MockLocationProviderPort;
    use crate::services::testing::FakeLocationProvider;

    #[tokio::test]
    async fn disabled_provider_does_nothing() {
        let mut provider = MockLocationProviderPort::new();
        provider.expect_is_provider_enabled().return_const(false);
        provider.expect_has_permission().never();
        provider.expect_request_permissions().never();
        provider.expect_request_updates().never();

        let mut flow = LocationRequestFlow::new(Arc::new(provider));
        assert_eq!(
            flow.request_current_location().await,
            LocationRequestOutcome::ProviderDisabled
        );
        assert!(!flow.is_watching());
    }

    #[tokio::test]
    async fn granted_permission_starts_watching_with_throttling() {
        let provider = Arc::new(FakeLocationProvider::granted());
        let mut flow = LocationRequestFlow::new(Arc::clone(&provider) as Arc<dyn LocationProviderPort>);

        let outcome = flow.request_current_location().await;
        assert_eq!(outcome, LocationRequestOutcome::Watching(WatchId(1)));
        assert_eq!(*provider.permission_requests.lock().unwrap(), 0);

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests[0].min_interval, Duration::from_millis(1500));
        assert!((requests[0].min_distance_m - 100.0).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn coarse_permission_alone_is_enough() {
        let provider = Arc::new(FakeLocationProvider {
            enabled: true,
            granted: HashMap::from([(LocationPermission::Coarse, true)]),
            ..FakeLocationProvider::default()
        });
        let mut flow = LocationRequestFlow::new(Arc::clone(&provider) as Arc<dyn LocationProviderPort>);

        assert!(matches!(
            flow.request_current_location().await,
            LocationRequestOutcome::Watching(_)
        ));
        assert_eq!(*provider.permission_requests.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_permission_is_requested() {
        let provider = Arc::new(FakeLocationProvider {
            enabled: true,
            answers: HashMap::from([
                (LocationPermission::Fine, true),
                (LocationPermission::Coarse, true),
            ]),
            ..FakeLocationProvider::default()
        });
        let mut flow = LocationRequestFlow::new(Arc::clone(&provider) as Arc<dyn LocationProviderPort>);

        assert!(matches!(
            flow.request_current_location().await,
            LocationRequestOutcome::Watching(_)
        ));
        assert_eq!(*provider.permission_requests.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn any_denial_aborts_silently() {
        let provider = Arc::new(FakeLocationProvider {
            enabled: true,
            answers: HashMap::from([
                (LocationPermission::Fine, false),
                (LocationPermission::Coarse, true),
            ]),
            ..FakeLocationProvider::default()
        });
        let mut flow = LocationRequestFlow::new(Arc::clone(&provider) as Arc<dyn LocationProviderPort>);

        assert_eq!(
            flow.request_current_location().await,
            LocationRequestOutcome::PermissionDenied
        );
        assert_eq!(provider.active_watches(), 0);
    }

    #[tokio::test]
    async fn only_first_update_is_consumed() {
        let provider = Arc::new(FakeLocationProvider::granted());
        let mut flow = LocationRequestFlow::new(Arc::clone(&provider) as Arc<dyn LocationProviderPort>);
        flow.request_current_location().await;

        provider.push(Coordinate::new(37.56, 126.97));
        let update = flow.next_update().await.unwrap();
        assert_eq!(flow.on_location_update(update), Some(update));

        assert!(!flow.is_watching());
        assert_eq!(provider.active_watches(), 0);
        assert_eq!(provider.removed.lock().unwrap().as_slice(), &[WatchId(1)]);

        assert_eq!(flow.on_location_update(Coordinate::new(37.57, 126.98)), None);
    }

    #[tokio::test]
    async fn repeated_request_does_not_subscribe_twice() {
        let provider = Arc::new(FakeLocationProvider::granted());
        let mut flow = LocationRequestFlow::new(Arc::clone(&provider) as Arc<dyn LocationProviderPort>);

        flow.request_current_location().await;
        assert_eq!(
            flow.request_current_location().await,
            LocationRequestOutcome::AlreadyWatching(WatchId(1))
        );
        assert_eq!(provider.active_watches(), 1);
    }

    #[tokio::test]
    async fn new_request_after_stop_watches_again() {
        let provider = Arc::new(FakeLocationProvider::granted());
        let mut flow = LocationRequestFlow::new(Arc::clone(&provider) as Arc<dyn LocationProviderPort>);

        flow.request_current_location().await;
        flow.on_location_update(Coordinate::new(37.56, 126.97));
        assert_eq!(
            flow.request_current_location().await,
            LocationRequestOutcome::Watching(WatchId(2))
        );
    }
}
