//! Daily message retention purge.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use locahub_service::MessageService;

/// Prevents two runs of the same job from overlapping.
///
/// The purge has no timeout and the scheduler would happily fire the next
/// tick while a slow run is still deleting; a tick that finds the guard held
/// is skipped instead.
#[derive(Debug, Default)]
pub struct OverlapGuard {
    in_flight: AtomicBool,
}

impl OverlapGuard {
    /// Creates a released guard.
    pub fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
        }
    }

    /// Try to acquire the guard. Returns `false` when a run is in flight.
    pub fn try_begin(&self) -> bool {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Release the guard after a run completes.
    pub fn end(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

/// The retention purge job: delete messages older than the configured
/// threshold (days), once per scheduled tick.
#[derive(Debug, Clone)]
pub struct RetentionJob {
    /// Message service owning the purge operation.
    messages: Arc<MessageService>,
    /// Age threshold in days.
    max_age_days: i64,
    /// Overlap guard shared across ticks.
    guard: Arc<OverlapGuard>,
}

impl RetentionJob {
    /// Creates a new retention job.
    pub fn new(messages: Arc<MessageService>, max_age_days: i64) -> Self {
        Self {
            messages,
            max_age_days,
            guard: Arc::new(OverlapGuard::new()),
        }
    }

    /// Run one purge tick. Skips when the previous run is still active.
    pub async fn run(&self) {
        if !self.guard.try_begin() {
            warn!("Previous retention purge still running, skipping this tick");
            return;
        }

        info!(max_age_days = self.max_age_days, "Running message retention purge");
        match self.messages.purge_older_than(self.max_age_days).await {
            Ok(removed) => info!(removed, "Retention purge finished"),
            Err(e) => warn!(error = %e, "Retention purge failed"),
        }

        self.guard.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_blocks_second_acquisition_until_released() {
        let guard = OverlapGuard::new();

        assert!(guard.try_begin());
        assert!(!guard.try_begin());

        guard.end();
        assert!(guard.try_begin());
    }
}
