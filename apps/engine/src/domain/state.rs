use serde::Serialize;

/// Opaque stable identity supplied by the dispatch layer (chat user id).
pub type ParticipantId = i64;
/// A number within the drawable domain.
pub type Pick = u8;

/// Externally visible round phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Accepting reservations and draw requests.
    Open,
    /// A draw request is committed; the auto-draw timer is running.
    CooldownPending,
    /// The last draw produced no winner; the same reservations await a reroll.
    AwaitingReroll,
    /// An administrator has paused the game.
    Disabled,
}

/// Flow state underneath the enabled flag.
///
/// Kept separate from [`Phase`] so that disabling the game mid-flight
/// preserves the in-flight sub-state; re-enabling never silently discards
/// live reservations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubPhase {
    Open,
    CooldownPending,
    AwaitingReroll,
}

/// The single mutable unit of game state. One per engine instance; created
/// once at engine start and only ever reset in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Admin kill-switch. When false the reported phase is
    /// [`Phase::Disabled`] regardless of `sub_phase`.
    pub enabled: bool,
    /// Flow state of the current round.
    pub sub_phase: SubPhase,
    /// Participant and held picks, ordered by first reservation time.
    /// Each inner list is bounded by the configured reservation cap.
    pub reservations: Vec<(ParticipantId, Vec<Pick>)>,
    /// Most recently drawn number since the round was last cleared.
    pub last_draw: Option<Pick>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            enabled: true,
            sub_phase: SubPhase::Open,
            reservations: Vec::new(),
            last_draw: None,
        }
    }

    /// Externally visible phase: the disabled flag wins over the sub-phase.
    pub fn phase(&self) -> Phase {
        if !self.enabled {
            return Phase::Disabled;
        }
        match self.sub_phase {
            SubPhase::Open => Phase::Open,
            SubPhase::CooldownPending => Phase::CooldownPending,
            SubPhase::AwaitingReroll => Phase::AwaitingReroll,
        }
    }

    /// Clear reservations and the last draw, returning the flow to `Open`.
    /// The enabled flag is left untouched.
    pub fn reset(&mut self) {
        self.reservations.clear();
        self.last_draw = None;
        self.sub_phase = SubPhase::Open;
    }
}

/// Debug-time check of the structural invariants. A violation means the
/// mutual-exclusion discipline around the round was broken, so fail loudly
/// instead of limping on.
pub fn debug_assert_invariants(state: &RoundState, reservation_cap: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut seen: Vec<Pick> = Vec::new();
    for (participant, picks) in &state.reservations {
        assert!(
            !picks.is_empty(),
            "participant {participant} is listed without any picks"
        );
        assert!(
            picks.len() <= reservation_cap,
            "participant {participant} holds {} picks, cap is {reservation_cap}",
            picks.len()
        );
        for pick in picks {
            assert!(!seen.contains(pick), "number {pick} held twice");
            seen.push(*pick);
        }
    }

    if state.sub_phase == SubPhase::AwaitingReroll {
        assert!(
            !state.reservations.is_empty(),
            "awaiting reroll with no reservations"
        );
        assert!(state.last_draw.is_some(), "awaiting reroll with no last draw");
    }
}
