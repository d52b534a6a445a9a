//! Result list view port

use domain::entities::SearchResult;

/// A single row change pushed to the list view
///
/// Changes are meant to be applied in order; each index refers to the list
/// as it is after the previous changes were applied.
#[derive(Debug, Clone, PartialEq)]
pub enum ListChange {
    /// A new row appears at `index`
    Insert {
        /// Row position
        index: usize,
        /// Row content
        item: SearchResult,
    },
    /// The row at `index` disappears
    Remove {
        /// Row position
        index: usize,
    },
    /// The row at `index` keeps its identity but its content changed
    Update {
        /// Row position
        index: usize,
        /// New row content
        item: SearchResult,
    },
}

/// Renders the result rows of the search screen
pub trait ListView: Send {
    /// Apply row changes in order
    fn apply_changes(&mut self, changes: &[ListChange]);
}
