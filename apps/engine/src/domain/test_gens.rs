// Proptest generators for round domain types.
// Participants and numbers draw from small pools so collisions are common
// and the interesting rejection paths actually get exercised.

use std::ops::RangeInclusive;

use proptest::prelude::*;

use crate::domain::picks::reserve;
use crate::domain::state::{ParticipantId, Pick, RoundState};

/// Domain shared by every generated round.
pub const DOMAIN: RangeInclusive<Pick> = 1..=6;

/// Generate a participant id from a small pool.
pub fn participant() -> impl Strategy<Value = ParticipantId> {
    1i64..=8i64
}

/// Generate a number inside [`DOMAIN`].
pub fn number_in_domain() -> impl Strategy<Value = Pick> {
    *DOMAIN.start()..=*DOMAIN.end()
}

/// Generate a sequence of reservation attempts (participant, number).
pub fn attempts(max: usize) -> impl Strategy<Value = Vec<(ParticipantId, Pick)>> {
    prop::collection::vec((participant(), number_in_domain()), 0..max)
}

/// Build a round by replaying `attempts` in order, dropping rejected ones.
pub fn round_from_attempts(cap: usize, attempts: &[(ParticipantId, Pick)]) -> RoundState {
    let mut state = RoundState::empty();
    for (participant, number) in attempts {
        let _ = reserve(&mut state, &DOMAIN, cap, *participant, *number);
    }
    state
}
