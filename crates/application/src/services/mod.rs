//! Application services - Screen controllers and flows

pub mod list_diff;
mod location_flow;
mod map_controller;
mod map_screen;
mod result_list_controller;
mod screen_scope;
mod search_screen;

#[cfg(test)]
pub mod testing;

pub use location_flow::{
    LOCATION_MIN_DISTANCE_M, LOCATION_UPDATE_INTERVAL, LocationRequestFlow, LocationRequestOutcome,
};
pub use map_controller::{CAMERA_ZOOM_LEVEL, MapController};
pub use map_screen::{MapScreen, MapScreenEvent};
pub use result_list_controller::{ResultListController, SelectionHandler};
pub use screen_scope::ScreenScope;
pub use search_screen::{SearchOutcome, SearchScreen};
