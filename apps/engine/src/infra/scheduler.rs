//! Delayed-execution seam for the auto-draw timer.
//!
//! Cancellation through [`DrawHandle`] is best-effort: a task that is
//! already firing may still run. The authoritative guard against a stale
//! timer is the engine's phase re-check under the write lock at fire time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

/// Handle to one scheduled auto-draw.
#[derive(Debug, Clone, Default)]
pub struct DrawHandle {
    cancelled: Arc<AtomicBool>,
}

impl DrawHandle {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ask the scheduler to drop the pending task.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Schedules one deferred task per call.
pub trait DrawScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) -> DrawHandle;
}

/// Production scheduler backed by the tokio runtime.
pub struct TokioScheduler;

impl DrawScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) -> DrawHandle {
        let handle = DrawHandle::new();
        let guard = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if guard.is_cancelled() {
                return;
            }
            task.await;
        });
        handle
    }
}
