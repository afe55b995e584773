//! Draw resolution: winner computation and the resulting transition.

use crate::domain::state::{ParticipantId, Pick, RoundState, SubPhase};

/// Result of resolving one drawn number against the current reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResolution {
    pub number: Pick,
    /// Winners in reservation order. Empty means the round awaits a reroll.
    pub winners: Vec<ParticipantId>,
}

impl DrawResolution {
    pub fn is_resolved(&self) -> bool {
        !self.winners.is_empty()
    }
}

/// Apply one drawn number to the round.
///
/// A winning draw clears the table and reopens the round in the same step,
/// so callers holding the lock never observe an intermediate state. A miss
/// keeps every reservation and parks the round awaiting a reroll.
pub fn resolve_draw(state: &mut RoundState, number: Pick) -> DrawResolution {
    let winners: Vec<ParticipantId> = state
        .reservations
        .iter()
        .filter(|(_, picks)| picks.contains(&number))
        .map(|(participant, _)| *participant)
        .collect();
    // Global exclusivity bounds this at one; two holders of the same number
    // means the lock discipline was broken.
    debug_assert!(winners.len() <= 1, "number {number} held by {} participants", winners.len());

    if winners.is_empty() {
        state.sub_phase = SubPhase::AwaitingReroll;
        state.last_draw = Some(number);
    } else {
        state.reset();
    }

    DrawResolution { number, winners }
}
