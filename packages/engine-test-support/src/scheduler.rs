//! Manually driven scheduler: nothing runs until the test fires it.

use std::sync::Mutex;
use std::time::Duration;

use engine::{DrawHandle, DrawScheduler};
use futures::future::BoxFuture;

struct ScheduledDraw {
    delay: Duration,
    task: BoxFuture<'static, ()>,
    handle: DrawHandle,
}

/// [`DrawScheduler`] that queues tasks instead of running them.
///
/// Tests drive the clock by firing pending tasks explicitly, which makes
/// races like "the admin cancel lands before the timer" deterministic to
/// reproduce.
#[derive(Default)]
pub struct ManualScheduler {
    pending: Mutex<Vec<ScheduledDraw>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks scheduled and not yet fired.
    pub fn pending(&self) -> usize {
        self.pending.lock().expect("scheduler lock poisoned").len()
    }

    /// Delay the oldest pending task was scheduled with.
    pub fn next_delay(&self) -> Option<Duration> {
        self.pending
            .lock()
            .expect("scheduler lock poisoned")
            .first()
            .map(|scheduled| scheduled.delay)
    }

    /// Fire the oldest pending task unless its handle was cancelled, the
    /// way a real timer honors cancellation before its deadline. Returns
    /// whether a task actually ran.
    pub async fn fire_next(&self) -> bool {
        match self.pop_next() {
            Some(scheduled) if !scheduled.handle.is_cancelled() => {
                scheduled.task.await;
                true
            }
            _ => false,
        }
    }

    /// Fire the oldest pending task even if its handle was cancelled,
    /// mimicking a timer that was already in flight when the cancel
    /// landed. Returns whether a task ran.
    pub async fn fire_next_forced(&self) -> bool {
        match self.pop_next() {
            Some(scheduled) => {
                scheduled.task.await;
                true
            }
            None => false,
        }
    }

    fn pop_next(&self) -> Option<ScheduledDraw> {
        let mut pending = self.pending.lock().expect("scheduler lock poisoned");
        if pending.is_empty() {
            None
        } else {
            Some(pending.remove(0))
        }
    }
}

impl DrawScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) -> DrawHandle {
        let handle = DrawHandle::new();
        self.pending
            .lock()
            .expect("scheduler lock poisoned")
            .push(ScheduledDraw {
                delay,
                task,
                handle: handle.clone(),
            });
        handle
    }
}
