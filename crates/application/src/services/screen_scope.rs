//! Screen-bound background tasks
//!
//! Network work started by a screen runs on the scope and is cancelled when
//! the screen is disposed, so no completion is ever delivered to a torn-down
//! screen.

use std::future::Future;

use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Set of background tasks owned by one screen
#[derive(Debug)]
pub struct ScreenScope<T> {
    name: &'static str,
    tasks: JoinSet<T>,
    disposed: bool,
}

impl<T: Send + 'static> ScreenScope<T> {
    /// Create an empty scope named after its screen
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: JoinSet::new(),
            disposed: false,
        }
    }

    /// Spawn `task` on the scope
    ///
    /// Returns `false` without spawning once the scope is disposed.
    pub fn launch<F>(&mut self, task: F) -> bool
    where
        F: Future<Output = T> + Send + 'static,
    {
        if self.disposed {
            debug!(scope = self.name, "Scope disposed, not launching task");
            return false;
        }
        self.tasks.spawn(task);
        true
    }

    /// Wait for the next finished task
    ///
    /// Returns `None` when nothing is running or the scope is disposed.
    /// Panicked tasks are logged and skipped.
    pub async fn next_outcome(&mut self) -> Option<T> {
        while !self.disposed {
            match self.tasks.join_next().await? {
                Ok(outcome) => return Some(outcome),
                Err(e) if e.is_cancelled() => {},
                Err(e) => warn!(scope = self.name, error = %e, "Background task failed"),
            }
        }
        None
    }

    /// Number of tasks still running
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task is running
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Cancel every running task and refuse new ones
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!(
            scope = self.name,
            cancelled = self.tasks.len(),
            "Disposing screen scope"
        );
        self.disposed = true;
        self.tasks.abort_all();
    }

    /// Whether [`dispose`](Self::dispose) was called
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn outcomes_are_delivered() {
        let mut scope = ScreenScope::new("test");
        assert!(scope.launch(async { 7 }));

        assert_eq!(scope.next_outcome().await, Some(7));
        assert_eq!(scope.next_outcome().await, None);
        assert!(scope.is_idle());
    }

    #[tokio::test]
    async fn dispose_cancels_running_tasks() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);

        let mut scope = ScreenScope::new("test");
        scope.launch(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        scope.dispose();

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!finished.load(Ordering::SeqCst));
        assert_eq!(scope.next_outcome().await, None);
    }

    #[tokio::test]
    async fn launch_after_dispose_is_refused() {
        let mut scope: ScreenScope<()> = ScreenScope::new("test");
        scope.dispose();

        assert!(scope.is_disposed());
        assert!(!scope.launch(async {}));
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test]
    async fn panicking_task_is_skipped() {
        let mut scope: ScreenScope<u32> = ScreenScope::new("test");
        scope.launch(async { panic!("boom") });
        scope.launch(async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            1
        });

        assert_eq!(scope.next_outcome().await, Some(1));
    }
}
