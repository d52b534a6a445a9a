//! Test doubles shared by the service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use domain::value_objects::Coordinate;
use tokio::sync::mpsc::UnboundedSender;

use crate::ports::{
    ListChange, ListView, LocationPermission, LocationProviderPort, MapSurface, MarkerId,
    UpdateRequest, WatchId,
};

/// A call received by [`RecordingMapSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    MoveCamera(Coordinate, f32),
    AddMarker {
        title: String,
        subtitle: String,
        coordinate: Coordinate,
    },
    RemoveMarker(MarkerId),
    ShowInfoPopup(MarkerId),
}

/// Map surface that records every call; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingMapSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
    next_marker: Arc<AtomicU64>,
}

impl RecordingMapSurface {
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Markers added and not removed since
    pub fn visible_markers(&self) -> Vec<MarkerId> {
        // Marker ids are handed out in insertion order starting at 1
        let mut added = 0;
        let mut visible = Vec::new();
        for call in self.calls() {
            match call {
                SurfaceCall::AddMarker { .. } => {
                    added += 1;
                    visible.push(MarkerId(added));
                },
                SurfaceCall::RemoveMarker(marker) => visible.retain(|m| *m != marker),
                _ => {},
            }
        }
        visible
    }

    pub fn markers_titled(&self, title: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, SurfaceCall::AddMarker { title: t, .. } if t == title))
            .count()
    }
}

impl MapSurface for RecordingMapSurface {
    fn move_camera(&mut self, coordinate: Coordinate, zoom_level: f32) {
        self.calls
            .lock()
            .unwrap()
            .push(SurfaceCall::MoveCamera(coordinate, zoom_level));
    }

    fn add_marker(&mut self, title: &str, subtitle: &str, coordinate: Coordinate) -> MarkerId {
        self.calls.lock().unwrap().push(SurfaceCall::AddMarker {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            coordinate,
        });
        MarkerId(self.next_marker.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.calls
            .lock()
            .unwrap()
            .push(SurfaceCall::RemoveMarker(marker));
    }

    fn show_info_popup(&mut self, marker: MarkerId) {
        self.calls
            .lock()
            .unwrap()
            .push(SurfaceCall::ShowInfoPopup(marker));
    }
}

/// List view that records every batch of changes
#[derive(Debug, Clone, Default)]
pub struct RecordingListView {
    pub batches: Arc<Mutex<Vec<Vec<ListChange>>>>,
}

impl ListView for RecordingListView {
    fn apply_changes(&mut self, changes: &[ListChange]) {
        self.batches.lock().unwrap().push(changes.to_vec());
    }
}

/// Location provider whose updates are pushed by the test
#[derive(Debug, Default)]
pub struct FakeLocationProvider {
    pub enabled: bool,
    pub granted: HashMap<LocationPermission, bool>,
    pub answers: HashMap<LocationPermission, bool>,
    pub permission_requests: Mutex<usize>,
    pub requests: Mutex<Vec<UpdateRequest>>,
    pub removed: Mutex<Vec<WatchId>>,
    pub(crate) sinks: Mutex<Vec<(WatchId, UnboundedSender<Coordinate>)>>,
    pub(crate) next_watch: AtomicU64,
}

impl FakeLocationProvider {
    pub fn granted() -> Self {
        Self {
            enabled: true,
            granted: LocationPermission::ALL.iter().map(|p| (*p, true)).collect(),
            ..Self::default()
        }
    }

    /// Deliver `coordinate` to every active watch
    pub fn push(&self, coordinate: Coordinate) {
        for (_, sink) in self.sinks.lock().unwrap().iter() {
            let _ = sink.send(coordinate);
        }
    }

    pub fn active_watches(&self) -> usize {
        self.sinks.lock().unwrap().len()
    }
}

#[async_trait]
impl LocationProviderPort for FakeLocationProvider {
    fn is_provider_enabled(&self) -> bool {
        self.enabled
    }

    fn has_permission(&self, permission: LocationPermission) -> bool {
        self.granted.get(&permission).copied().unwrap_or(false)
    }

    async fn request_permissions(
        &self,
        permissions: &[LocationPermission],
    ) -> HashMap<LocationPermission, bool> {
        *self.permission_requests.lock().unwrap() += 1;
        permissions
            .iter()
            .map(|p| (*p, self.answers.get(p).copied().unwrap_or(false)))
            .collect()
    }

    fn request_updates(
        &self,
        request: UpdateRequest,
        sink: UnboundedSender<Coordinate>,
    ) -> WatchId {
        let watch = WatchId(self.next_watch.fetch_add(1, Ordering::SeqCst) + 1);
        self.requests.lock().unwrap().push(request);
        self.sinks.lock().unwrap().push((watch, sink));
        watch
    }

    fn remove_updates(&self, watch: WatchId) {
        self.removed.lock().unwrap().push(watch);
        self.sinks.lock().unwrap().retain(|(id, _)| *id != watch);
    }
}
