//! Device location port
//!
//! Wraps the platform location provider together with its permission
//! prompt. Updates are delivered through a channel instead of a listener
//! object.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;
use tokio::sync::mpsc::UnboundedSender;

/// Location permissions the flow asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationPermission {
    /// Precise (GPS) location
    Fine,
    /// Approximate (network) location
    Coarse,
}

impl LocationPermission {
    /// Every permission requested by the current-location flow
    pub const ALL: [Self; 2] = [Self::Fine, Self::Coarse];
}

/// Throttling for recurring location updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateRequest {
    /// Minimum time between two updates
    pub min_interval: Duration,
    /// Minimum displacement in meters between two updates
    pub min_distance_m: f32,
}

/// Handle of an active update subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

impl fmt::Display for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "watch#{}", self.0)
    }
}

/// Port for the device location provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationProviderPort: Send + Sync {
    /// Whether the location provider (GPS) is switched on
    fn is_provider_enabled(&self) -> bool;

    /// Whether `permission` is currently granted
    fn has_permission(&self, permission: LocationPermission) -> bool;

    /// Ask the user for `permissions`, resolving once they answered
    async fn request_permissions(
        &self,
        permissions: &[LocationPermission],
    ) -> HashMap<LocationPermission, bool>;

    /// Start recurring updates, sent to `sink` until removed
    fn request_updates(&self, request: UpdateRequest, sink: UnboundedSender<Coordinate>)
    -> WatchId;

    /// Stop the updates of `watch`
    fn remove_updates(&self, watch: WatchId);
}
