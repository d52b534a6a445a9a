//! Static location adapter - Implements LocationProviderPort with a fixed position
//!
//! Stands in for a device location provider on hosts without one. Every new
//! watch immediately receives the configured position; [`publish`] moves the
//! position and notifies every active watch.
//!
//! [`publish`]: StaticLocationProvider::publish

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use application::ports::{LocationPermission, LocationProviderPort, UpdateRequest, WatchId};
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

/// Location provider reporting a fixed, movable position
#[derive(Debug)]
pub struct StaticLocationProvider {
    position: RwLock<Coordinate>,
    enabled: bool,
    grant_permissions: bool,
    granted: RwLock<bool>,
    watches: Mutex<HashMap<WatchId, UnboundedSender<Coordinate>>>,
    next_watch: AtomicU64,
}

impl StaticLocationProvider {
    /// Create an enabled provider at `position` that grants permission on request
    #[must_use]
    pub fn new(position: Coordinate) -> Self {
        Self {
            position: RwLock::new(position),
            enabled: true,
            grant_permissions: true,
            granted: RwLock::new(false),
            watches: Mutex::new(HashMap::new()),
            next_watch: AtomicU64::new(1),
        }
    }

    /// Report the provider as switched off
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Deny every permission request
    #[must_use]
    pub fn denying_permissions(mut self) -> Self {
        self.grant_permissions = false;
        self
    }

    /// Current position
    pub fn position(&self) -> Coordinate {
        *self.position.read()
    }

    /// Move to `position` and notify active watches
    pub fn publish(&self, position: Coordinate) {
        *self.position.write() = position;
        let mut watches = self.watches.lock();
        // Drop watches whose receiver is gone
        watches.retain(|_, sink| sink.send(position).is_ok());
        debug!(%position, watches = watches.len(), "Published position");
    }

    /// Number of active watches
    pub fn active_watches(&self) -> usize {
        self.watches.lock().len()
    }
}

#[async_trait]
impl LocationProviderPort for StaticLocationProvider {
    fn is_provider_enabled(&self) -> bool {
        self.enabled
    }

    fn has_permission(&self, _permission: LocationPermission) -> bool {
        *self.granted.read()
    }

    async fn request_permissions(
        &self,
        permissions: &[LocationPermission],
    ) -> HashMap<LocationPermission, bool> {
        *self.granted.write() = self.grant_permissions;
        info!(granted = self.grant_permissions, "Location permission answered");
        permissions
            .iter()
            .map(|permission| (*permission, self.grant_permissions))
            .collect()
    }

    fn request_updates(&self, request: UpdateRequest, sink: UnboundedSender<Coordinate>) -> WatchId {
        let watch = WatchId(self.next_watch.fetch_add(1, Ordering::Relaxed));
        let position = self.position();
        debug!(
            %watch,
            min_interval_ms = request.min_interval.as_millis(),
            min_distance_m = request.min_distance_m,
            "Location watch started"
        );

        if sink.send(position).is_ok() {
            self.watches.lock().insert(watch, sink);
        }
        watch
    }

    fn remove_updates(&self, watch: WatchId) {
        if self.watches.lock().remove(&watch).is_some() {
            debug!(%watch, "Location watch removed");
        }
    }
}
