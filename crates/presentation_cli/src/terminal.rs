//! Terminal renderings of the map surface and the result list

use application::ports::{ListChange, ListView, MapSurface, MarkerId};
use domain::entities::SearchResult;
use domain::value_objects::Coordinate;

/// One result row as printed by the CLI
pub fn format_row(index: usize, result: &SearchResult) -> String {
    format!(
        "[{index}] {} | {} ({})",
        result.building_name(),
        result.full_address(),
        result.location()
    )
}

/// One list change as printed by the CLI
pub fn format_change(change: &ListChange) -> String {
    match change {
        ListChange::Insert { index, item } => format!("+ {}", format_row(*index, item)),
        ListChange::Remove { index } => format!("- [{index}]"),
        ListChange::Update { index, item } => format!("~ {}", format_row(*index, item)),
    }
}

/// List view printing every change it receives
#[derive(Debug, Default)]
pub struct TerminalListView;

impl ListView for TerminalListView {
    fn apply_changes(&mut self, changes: &[ListChange]) {
        for change in changes {
            println!("{}", format_change(change));
        }
    }
}

/// Map surface printing the camera and marker operations
#[derive(Debug, Default)]
pub struct TerminalMapSurface {
    next_marker: u64,
}

impl MapSurface for TerminalMapSurface {
    fn move_camera(&mut self, coordinate: Coordinate, zoom_level: f32) {
        println!("🎥 camera -> {coordinate} @ zoom {zoom_level}");
    }

    fn add_marker(&mut self, title: &str, subtitle: &str, coordinate: Coordinate) -> MarkerId {
        self.next_marker += 1;
        let marker = MarkerId(self.next_marker);
        println!("📍 {marker}: {title} | {subtitle} ({coordinate})");
        marker
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        println!("🗑️  {marker} removed");
    }

    fn show_info_popup(&mut self, marker: MarkerId) {
        println!("💬 {marker} info window opened");
    }
}
