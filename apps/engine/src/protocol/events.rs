//! Outcome events emitted after a round mutation commits.
//!
//! Events are emitted outside the state lock, using the value computed
//! under it. Timer-fired draws have no caller to return a value to, so the
//! sink is the only delivery path for them; direct calls both return the
//! outcome and emit.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::state::{ParticipantId, Pick};

/// Envelope the dispatch layer renders and delivers to the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    /// A draw found a winner; the table was cleared.
    DrawResolved {
        number: Pick,
        winners: Vec<ParticipantId>,
    },
    /// A draw found no winner; the same reservations await a reroll.
    DrawMissed { number: Pick },
    /// An administrator cancelled the round; all reservations were discarded.
    RoundCancelled,
}

/// Delivery seam for round outcomes.
pub trait OutcomeSink: Send + Sync {
    fn emit(&self, event: RoundEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl OutcomeSink for NullSink {
    fn emit(&self, _event: RoundEvent) {}
}

/// Sink that forwards events over an unbounded channel to the dispatch
/// layer.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<RoundEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RoundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl OutcomeSink for ChannelSink {
    fn emit(&self, event: RoundEvent) {
        if self.tx.send(event).is_err() {
            warn!("Outcome receiver dropped, event discarded");
        }
    }
}
