//! Timeout enforcement.
//!
//! # Responsibilities
//! - Run a unit of work as its own task
//! - Race it against a fixed deadline, first outcome wins
//! - Cancel the work when the caller stops waiting
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities on the task's JoinHandle
//! - The work receives a CancellationToken that fires on timeout and
//!   whenever the waiting request is dropped
//! - Timed-out requests return 408 Request Timeout

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::patches::{PatchError, ResolveError};

/// Races a spawned unit of work against a deadline.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineGuard {
    deadline: Duration,
}

impl DeadlineGuard {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }

    /// Spawn `work` and wait for it up to the deadline.
    ///
    /// Exactly one outcome is returned: the work's own result if it finishes
    /// in time, otherwise [`PatchError::Timeout`]. A panicking task surfaces
    /// as a resolution failure.
    pub async fn run<T, F, Fut>(&self, work: F) -> Result<T, PatchError>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, PatchError>> + Send + 'static,
        T: Send + 'static,
    {
        let token = CancellationToken::new();
        // Fires on every exit, including this future being dropped mid-wait.
        let _cancel_on_exit = token.clone().drop_guard();

        let mut handle = tokio::spawn(work(token.clone()));

        match tokio::time::timeout(self.deadline, &mut handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => {
                tracing::error!(error = %join_err, "Resolution task failed");
                Err(PatchError::Resolution(ResolveError::Aborted(
                    join_err.to_string(),
                )))
            }
            Err(_) => {
                token.cancel();
                tracing::debug!(
                    deadline_ms = self.deadline.as_millis() as u64,
                    "Deadline elapsed before resolution finished"
                );
                Err(PatchError::Timeout)
            }
        }
    }
}
