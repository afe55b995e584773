//! Unit tests for draw resolution.

use crate::domain::draw::resolve_draw;
use crate::domain::state::{ParticipantId, Phase, Pick, RoundState, SubPhase};

fn round_with(reservations: Vec<(ParticipantId, Vec<Pick>)>) -> RoundState {
    let mut state = RoundState::empty();
    state.reservations = reservations;
    state
}

#[test]
fn winning_draw_clears_table_and_reopens() {
    let mut state = round_with(vec![(101, vec![1, 2]), (202, vec![3])]);

    let resolution = resolve_draw(&mut state, 2);

    assert!(resolution.is_resolved());
    assert_eq!(resolution.winners, vec![101]);
    assert!(state.reservations.is_empty());
    assert_eq!(state.phase(), Phase::Open);
    assert_eq!(state.last_draw, None);
}

#[test]
fn second_pick_of_a_participant_wins_too() {
    let mut state = round_with(vec![(101, vec![5, 3]), (202, vec![1])]);

    let resolution = resolve_draw(&mut state, 3);

    assert_eq!(resolution.winners, vec![101]);
}

#[test]
fn missed_draw_parks_round_for_reroll() {
    let mut state = round_with(vec![(101, vec![1, 2]), (202, vec![3])]);

    let resolution = resolve_draw(&mut state, 5);

    assert!(!resolution.is_resolved());
    assert!(resolution.winners.is_empty());
    assert_eq!(state.sub_phase, SubPhase::AwaitingReroll);
    assert_eq!(state.last_draw, Some(5));
    assert_eq!(state.reservations, vec![(101, vec![1, 2]), (202, vec![3])]);
}

#[test]
fn reroll_after_miss_can_resolve() {
    let mut state = round_with(vec![(101, vec![4])]);

    let miss = resolve_draw(&mut state, 6);
    assert!(!miss.is_resolved());

    let hit = resolve_draw(&mut state, 4);
    assert_eq!(hit.winners, vec![101]);
    assert!(state.reservations.is_empty());
    assert_eq!(state.phase(), Phase::Open);
}

#[test]
fn winning_draw_clears_stale_last_draw() {
    let mut state = round_with(vec![(101, vec![4])]);
    resolve_draw(&mut state, 6);
    assert_eq!(state.last_draw, Some(6));

    resolve_draw(&mut state, 4);
    assert_eq!(state.last_draw, None);
}
