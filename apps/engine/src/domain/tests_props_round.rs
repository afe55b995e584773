//! Property tests for reservation and draw behavior (pure domain, no locks).

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::draw::resolve_draw;
use crate::domain::picks::reserve;
use crate::domain::state::{Phase, SubPhase};
use crate::domain::test_gens::{self, DOMAIN};
use crate::domain::test_prelude;
use crate::errors::domain::PickError;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Global exclusivity
    /// No number is ever held by two distinct participants, whatever the
    /// order of accepted and rejected attempts.
    #[test]
    fn prop_numbers_globally_exclusive(
        cap in 1usize..=3,
        attempts in test_gens::attempts(32),
    ) {
        let state = test_gens::round_from_attempts(cap, &attempts);

        let mut seen = HashSet::new();
        for (participant, picks) in &state.reservations {
            for pick in picks {
                prop_assert!(seen.insert(*pick),
                    "number {} held by {} and another participant", pick, participant);
            }
        }
    }

    /// Property: Reservation cap
    /// No participant's held set ever exceeds the configured cap.
    #[test]
    fn prop_cap_never_exceeded(
        cap in 1usize..=3,
        attempts in test_gens::attempts(32),
    ) {
        let state = test_gens::round_from_attempts(cap, &attempts);

        for (participant, picks) in &state.reservations {
            prop_assert!(picks.len() <= cap,
                "participant {} holds {} picks, cap is {}", participant, picks.len(), cap);
        }
    }

    /// Property: Reroll preserves reservations
    /// A drawn number nobody holds never alters the reservations.
    #[test]
    fn prop_missed_draw_preserves_reservations(
        cap in 1usize..=3,
        attempts in test_gens::attempts(32),
        number in test_gens::number_in_domain(),
    ) {
        let mut state = test_gens::round_from_attempts(cap, &attempts);
        prop_assume!(!state.reservations.is_empty());
        prop_assume!(!state.reservations.iter().any(|(_, picks)| picks.contains(&number)));

        let before = state.reservations.clone();
        let resolution = resolve_draw(&mut state, number);

        prop_assert!(!resolution.is_resolved());
        prop_assert_eq!(&state.reservations, &before);
        prop_assert_eq!(state.sub_phase, SubPhase::AwaitingReroll);
        prop_assert_eq!(state.last_draw, Some(number));
    }

    /// Property: Winning draw resets atomically
    /// A drawn number someone holds resolves the round, clears the table
    /// and reopens in the same step.
    #[test]
    fn prop_winning_draw_clears_and_reopens(
        cap in 1usize..=3,
        attempts in test_gens::attempts(32),
        number in test_gens::number_in_domain(),
    ) {
        let mut state = test_gens::round_from_attempts(cap, &attempts);
        let holder = state
            .reservations
            .iter()
            .find(|(_, picks)| picks.contains(&number))
            .map(|(participant, _)| *participant);
        prop_assume!(holder.is_some());

        let resolution = resolve_draw(&mut state, number);

        prop_assert_eq!(resolution.winners, vec![holder.unwrap()]);
        prop_assert!(state.reservations.is_empty());
        prop_assert_eq!(state.phase(), Phase::Open);
        prop_assert_eq!(state.last_draw, None);
    }

    /// Property: Busy rejection
    /// While a draw is pending or unresolved every reservation attempt is
    /// rejected busy and the table is untouched, whatever the number.
    #[test]
    fn prop_busy_round_rejects_every_reserve(
        cap in 1usize..=3,
        attempts in test_gens::attempts(16),
        participant in test_gens::participant(),
        number in test_gens::number_in_domain(),
        pending in proptest::bool::ANY,
    ) {
        let mut state = test_gens::round_from_attempts(cap, &attempts);
        state.sub_phase = if pending {
            SubPhase::CooldownPending
        } else {
            SubPhase::AwaitingReroll
        };

        let before = state.reservations.clone();
        let result = reserve(&mut state, &DOMAIN, cap, participant, number);

        prop_assert_eq!(result, Err(PickError::RoundBusy));
        prop_assert_eq!(&state.reservations, &before);
    }
}
