//! Search screen
//!
//! Turns a submitted keyword into a background search and feeds the
//! converted results into the result list. A failed search is reported to
//! the caller and leaves the list exactly as it was.

use std::sync::Arc;

use domain::entities::{PlaceCandidate, SearchResult};
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::SearchPort;
use crate::services::result_list_controller::ResultListController;
use crate::services::screen_scope::ScreenScope;

/// Completion of one background search
#[derive(Debug)]
pub struct SearchOutcome {
    /// Order in which the search was started, from 1
    pub sequence: u64,
    /// Keyword as submitted
    pub keyword: String,
    /// Raw candidates, or why the search failed
    pub result: Result<Vec<PlaceCandidate>, ApplicationError>,
}

/// Controller of the search screen
pub struct SearchScreen {
    search: Arc<dyn SearchPort>,
    list: ResultListController,
    scope: ScreenScope<SearchOutcome>,
    last_sequence: u64,
}

impl std::fmt::Debug for SearchScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScreen")
            .field("list", &self.list)
            .field("scope", &self.scope)
            .field("last_sequence", &self.last_sequence)
            .finish_non_exhaustive()
    }
}

impl SearchScreen {
    /// Create the screen around an existing result list
    #[must_use]
    pub fn new(search: Arc<dyn SearchPort>, list: ResultListController) -> Self {
        Self {
            search,
            list,
            scope: ScreenScope::new("search"),
            last_sequence: 0,
        }
    }

    /// Start a search for `keyword` in the background
    ///
    /// Returns `false` when the screen was already disposed.
    #[instrument(skip(self))]
    pub fn search(&mut self, keyword: &str) -> bool {
        let keyword = keyword.to_string();
        let sequence = self.last_sequence + 1;
        let search = Arc::clone(&self.search);

        let launched = self.scope.launch(async move {
            let result = search.search(&keyword).await;
            SearchOutcome {
                sequence,
                keyword,
                result,
            }
        });
        if launched {
            self.last_sequence = sequence;
        }
        launched
    }

    /// Wait for the next search to complete
    pub async fn next_outcome(&mut self) -> Option<SearchOutcome> {
        self.scope.next_outcome().await
    }

    /// Apply a completed search to the list
    ///
    /// On success the list is replaced and the number of rows is returned.
    /// On failure the list is left untouched and the error is returned.
    pub fn apply(&mut self, outcome: SearchOutcome) -> Result<usize, ApplicationError> {
        match outcome.result {
            Ok(candidates) => {
                let results: Vec<SearchResult> = candidates
                    .into_iter()
                    .map(PlaceCandidate::into_search_result)
                    .collect();
                let rows = results.len();
                info!(
                    sequence = outcome.sequence,
                    keyword = %outcome.keyword,
                    rows,
                    "Search completed"
                );
                self.list.submit(results);
                Ok(rows)
            },
            Err(e) => {
                warn!(
                    sequence = outcome.sequence,
                    keyword = %outcome.keyword,
                    error = %e,
                    "Search failed, keeping previous results"
                );
                Err(e)
            },
        }
    }

    /// Wait for the next completed search and apply it
    ///
    /// Returns `None` once no search is running.
    pub async fn process_next(&mut self) -> Option<Result<usize, ApplicationError>> {
        let outcome = self.next_outcome().await?;
        Some(self.apply(outcome))
    }

    /// Handle a tap on the row at `index`
    pub fn select(&mut self, index: usize) -> bool {
        self.list.select(index)
    }

    /// Rows currently displayed
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        self.list.items()
    }

    /// Number of searches still running
    #[must_use]
    pub fn pending_searches(&self) -> usize {
        self.scope.pending()
    }

    /// Cancel running searches; later completions are dropped
    pub fn dispose(&mut self) {
        self.scope.dispose();
    }
}
