//! Read-only view of the round for "list current picks" style queries.

use serde::Serialize;

use crate::domain::state::{ParticipantId, Phase, Pick, RoundState};

/// Serializable snapshot of the round, safe to hand to the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub phase: Phase,
    /// Participant and held picks, ordered by first reservation time.
    pub reservations: Vec<(ParticipantId, Vec<Pick>)>,
    pub last_draw: Option<Pick>,
    pub distinct_participants: usize,
}

impl RoundSnapshot {
    pub fn of(state: &RoundState) -> Self {
        Self {
            phase: state.phase(),
            reservations: state.reservations.clone(),
            last_draw: state.last_draw,
            distinct_participants: state.reservations.len(),
        }
    }
}
