//! Reservation validation and bookkeeping.

use std::ops::RangeInclusive;

use crate::domain::state::{ParticipantId, Pick, RoundState, SubPhase};
use crate::errors::domain::PickError;

/// Claim `number` for `participant`.
///
/// Rejection order: the disabled and busy gates come first (while a draw is
/// pending or unresolved every reservation is rejected busy, whatever the
/// number), then the domain check, then per-number and per-participant
/// checks. On success returns the participant's full held set for display.
pub fn reserve(
    state: &mut RoundState,
    domain: &RangeInclusive<Pick>,
    reservation_cap: usize,
    participant: ParticipantId,
    number: Pick,
) -> Result<Vec<Pick>, PickError> {
    if !state.enabled {
        return Err(PickError::Disabled);
    }
    if state.sub_phase != SubPhase::Open {
        return Err(PickError::RoundBusy);
    }
    if !domain.contains(&number) {
        return Err(PickError::OutOfDomain);
    }
    if holder_of(state, number).is_some_and(|holder| holder != participant) {
        return Err(PickError::AlreadyTaken);
    }

    let held = picks_of(state, participant).map_or(0, |picks| picks.len());
    if held >= reservation_cap {
        return Err(PickError::CapExceeded);
    }
    if picks_of(state, participant).is_some_and(|picks| picks.contains(&number)) {
        return Err(PickError::DuplicatePick);
    }

    if let Some((_, picks)) = state
        .reservations
        .iter_mut()
        .find(|(holder, _)| *holder == participant)
    {
        picks.push(number);
        Ok(picks.clone())
    } else {
        state.reservations.push((participant, vec![number]));
        Ok(vec![number])
    }
}

/// The participant holding `number`, if any.
pub fn holder_of(state: &RoundState, number: Pick) -> Option<ParticipantId> {
    state
        .reservations
        .iter()
        .find(|(_, picks)| picks.contains(&number))
        .map(|(holder, _)| *holder)
}

/// The picks held by `participant`, in reservation order.
pub fn picks_of(state: &RoundState, participant: ParticipantId) -> Option<&[Pick]> {
    state
        .reservations
        .iter()
        .find(|(holder, _)| *holder == participant)
        .map(|(_, picks)| picks.as_slice())
}

/// Number of distinct participants holding at least one reservation.
pub fn distinct_participants(state: &RoundState) -> usize {
    state.reservations.len()
}
