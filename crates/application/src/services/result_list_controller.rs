//! Search result list controller
//!
//! Owns the rows shown on the search screen, pushes minimal diffs to the
//! list view and promotes a tapped row through the selection callback.

use domain::entities::SearchResult;
use tracing::debug;

use crate::ports::ListView;
use crate::services::list_diff;

/// Callback invoked with the tapped row
pub type SelectionHandler = Box<dyn FnMut(SearchResult) + Send>;

/// Controller of the search result list
pub struct ResultListController {
    items: Vec<SearchResult>,
    view: Box<dyn ListView>,
    on_select: SelectionHandler,
}

impl std::fmt::Debug for ResultListController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultListController")
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl ResultListController {
    /// Create an empty list bound to `view`
    #[must_use]
    pub fn new(view: Box<dyn ListView>, on_select: SelectionHandler) -> Self {
        Self {
            items: Vec::new(),
            view,
            on_select,
        }
    }

    /// Replace the displayed rows
    ///
    /// Only the rows that changed are pushed to the view.
    pub fn submit(&mut self, results: Vec<SearchResult>) {
        let changes = list_diff::diff(&self.items, &results);
        debug!(
            rows = results.len(),
            changes = changes.len(),
            "Submitting search results"
        );
        if !changes.is_empty() {
            self.view.apply_changes(&changes);
        }
        self.items = results;
    }

    /// Handle a tap on the row at `index`
    ///
    /// Fires the selection callback once and returns `true`, or returns
    /// `false` when there is no such row.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(result) = self.items.get(index).cloned() else {
            debug!(index, "Ignoring tap outside the list");
            return false;
        };
        (self.on_select)(result);
        true
    }

    /// Rows currently displayed
    #[must_use]
    pub fn items(&self) -> &[SearchResult] {
        &self.items
    }

    /// Whether no row is displayed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use domain::value_objects::Coordinate;

    use super::*;
    use crate::ports::ListChange;

    #[derive(Debug, Default, Clone)]
    struct RecordingView {
        batches: Arc<Mutex<Vec<Vec<ListChange>>>>,
    }

    impl ListView for RecordingView {
        fn apply_changes(&mut self, changes: &[ListChange]) {
            self.batches.lock().unwrap().push(changes.to_vec());
        }
    }

    fn row(name: &str, address: &str) -> SearchResult {
        SearchResult::new(name, address, Coordinate::new(37.55, 126.97))
    }

    fn controller() -> (
        ResultListController,
        RecordingView,
        Arc<Mutex<Vec<SearchResult>>>,
    ) {
        let view = RecordingView::default();
        let selected = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&selected);
        let controller = ResultListController::new(
            Box::new(view.clone()),
            Box::new(move |result| sink.lock().unwrap().push(result)),
        );
        (controller, view, selected)
    }

    #[test]
    fn submit_replaces_rows() {
        let (mut controller, view, _) = controller();
        controller.submit(vec![row("A", "a"), row("B", "b")]);
        controller.submit(vec![row("C", "c")]);

        assert_eq!(controller.items(), &[row("C", "c")]);
        assert_eq!(view.batches.lock().unwrap().len(), 2);
    }

    #[test]
    fn resubmitting_same_rows_does_not_touch_view() {
        let (mut controller, view, _) = controller();
        controller.submit(vec![row("A", "a")]);
        controller.submit(vec![row("A", "a")]);

        assert_eq!(view.batches.lock().unwrap().len(), 1);
    }

    #[test]
    fn renamed_row_is_updated_in_place() {
        let (mut controller, view, _) = controller();
        controller.submit(vec![row("Seoul Station", "Seoul Jung-gu Bongnaedong  1")]);
        controller.submit(vec![row("Seoul Stn.", "Seoul Jung-gu Bongnaedong  1")]);

        let batches = view.batches.lock().unwrap();
        assert_eq!(
            batches[1],
            vec![ListChange::Update {
                index: 0,
                item: row("Seoul Stn.", "Seoul Jung-gu Bongnaedong  1"),
            }]
        );
    }

    #[test]
    fn select_fires_once_per_tap() {
        let (mut controller, _, selected) = controller();
        controller.submit(vec![row("A", "a"), row("B", "b")]);

        assert!(controller.select(1));
        assert_eq!(selected.lock().unwrap().as_slice(), &[row("B", "b")]);

        assert!(controller.select(1));
        assert_eq!(selected.lock().unwrap().len(), 2);
    }

    #[test]
    fn select_outside_list_is_ignored() {
        let (mut controller, _, selected) = controller();
        assert!(!controller.select(0));
        assert!(selected.lock().unwrap().is_empty());
    }

    #[test]
    fn empty_submission_is_valid() {
        let (mut controller, _, _) = controller();
        controller.submit(Vec::new());
        assert!(controller.is_empty());
    }
}
