//! Outcome sink that records every emitted event for inspection.

use std::sync::Mutex;

use engine::{OutcomeSink, RoundEvent};

/// [`OutcomeSink`] backed by an in-memory list.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RoundEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> Vec<RoundEvent> {
        self.events.lock().expect("sink lock poisoned").clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<RoundEvent> {
        std::mem::take(&mut *self.events.lock().expect("sink lock poisoned"))
    }
}

impl OutcomeSink for RecordingSink {
    fn emit(&self, event: RoundEvent) {
        self.events.lock().expect("sink lock poisoned").push(event);
    }
}
