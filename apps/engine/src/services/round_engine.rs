//! The drawing-round engine: owns the single shared round, serializes every
//! mutation behind a write lock, and drives the auto-draw timer.
//!
//! Locking discipline: every mutating operation takes the write lock and
//! applies an atomic read-modify-write; `status` takes the read lock. The
//! timer callback is just another writer and re-checks phase after acquiring
//! the lock, never before. Nothing blocks on I/O while the lock is held;
//! outcome events are emitted after the guard is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::game::GameConfig;
use crate::domain::draw::resolve_draw;
use crate::domain::picks;
use crate::domain::snapshot::RoundSnapshot;
use crate::domain::state::{
    debug_assert_invariants, ParticipantId, Pick, RoundState, SubPhase,
};
use crate::errors::domain::{DrawError, PickError};
use crate::infra::draw_source::DrawSource;
use crate::infra::scheduler::{DrawHandle, DrawScheduler};
use crate::protocol::events::{OutcomeSink, RoundEvent};

/// Caller-facing result of a draw entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The draw found a winner and the round was reset.
    Resolved {
        number: Pick,
        winners: Vec<ParticipantId>,
    },
    /// The draw found no winner; reservations are kept for a reroll.
    NoWinner { number: Pick },
    /// The draw was committed and will resolve when the timer fires.
    Scheduled { wait: Duration },
}

/// Everything guarded by the round lock. The timer handle and the sampling
/// source live under the same lock as the state they coordinate with, so a
/// handle is only ever taken or cleared inside the section that decides
/// what it means.
struct RoundCell {
    state: RoundState,
    timer: Option<DrawHandle>,
    source: Box<dyn DrawSource>,
}

#[derive(Clone)]
pub struct RoundEngine {
    config: GameConfig,
    cell: Arc<RwLock<RoundCell>>,
    scheduler: Arc<dyn DrawScheduler>,
    sink: Arc<dyn OutcomeSink>,
}

impl RoundEngine {
    pub fn new(
        config: GameConfig,
        scheduler: Arc<dyn DrawScheduler>,
        source: Box<dyn DrawSource>,
        sink: Arc<dyn OutcomeSink>,
    ) -> Self {
        Self {
            config,
            cell: Arc::new(RwLock::new(RoundCell {
                state: RoundState::empty(),
                timer: None,
                source,
            })),
            scheduler,
            sink,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Claim `number` for `participant`. Returns the participant's full
    /// held set for display; notification is the caller's responsibility.
    pub async fn reserve(
        &self,
        participant: ParticipantId,
        number: Pick,
    ) -> Result<Vec<Pick>, PickError> {
        let mut guard = self.cell.write().await;
        let held = picks::reserve(
            &mut guard.state,
            &self.config.domain,
            self.config.reservation_cap,
            participant,
            number,
        )?;
        debug_assert_invariants(&guard.state, self.config.reservation_cap);
        debug!(participant, number, held = held.len(), "Reservation accepted");
        Ok(held)
    }

    /// Member-facing draw request: resolves immediately on a full table,
    /// otherwise commits the round and schedules the auto-draw.
    pub async fn request_draw(&self, caller: ParticipantId) -> Result<DrawOutcome, DrawError> {
        let (outcome, event) = {
            let mut guard = self.cell.write().await;
            if !guard.state.enabled {
                return Err(DrawError::Disabled);
            }
            if guard.state.sub_phase != SubPhase::Open {
                return Err(DrawError::RoundBusy);
            }
            let players = picks::distinct_participants(&guard.state);
            if players < self.config.min_participants {
                return Err(DrawError::InsufficientPlayers);
            }

            if players >= self.config.domain_size() {
                // Full table: every number can be held once, so nobody else
                // can join and there is nothing to wait for.
                info!(caller, players, "Draw requested on a full table, resolving now");
                let (outcome, event) = self.draw_locked(&mut guard);
                debug_assert_cell(&guard);
                (outcome, Some(event))
            } else {
                guard.state.sub_phase = SubPhase::CooldownPending;
                let wait = self.config.cooldown;
                let engine = self.clone();
                let handle = self
                    .scheduler
                    .schedule(wait, Box::pin(async move { engine.fire_auto_draw().await }));
                guard.timer = Some(handle);
                debug_assert_cell(&guard);
                info!(
                    caller,
                    players,
                    wait_ms = wait.as_millis() as u64,
                    "Draw committed, auto-draw scheduled"
                );
                (DrawOutcome::Scheduled { wait }, None)
            }
        };

        if let Some(event) = event {
            self.sink.emit(event);
        }
        Ok(outcome)
    }

    /// Follow-up draw against the same unresolved reservations. No cooldown
    /// wait; participants are already committed.
    pub async fn reroll(&self, caller: ParticipantId) -> Result<DrawOutcome, DrawError> {
        let (outcome, event) = {
            let mut guard = self.cell.write().await;
            if !guard.state.enabled {
                return Err(DrawError::Disabled);
            }
            if guard.state.sub_phase != SubPhase::AwaitingReroll {
                return Err(DrawError::NoPendingRound);
            }
            info!(caller, "Reroll requested");
            let (outcome, event) = self.draw_locked(&mut guard);
            debug_assert_cell(&guard);
            (outcome, event)
        };

        self.sink.emit(event);
        Ok(outcome)
    }

    /// Administrator cancel. The caller is pre-authorized; the engine trusts
    /// the dispatch layer's role check.
    pub async fn cancel_round(&self, caller: ParticipantId) {
        {
            let mut guard = self.cell.write().await;
            if let Some(handle) = guard.timer.take() {
                handle.cancel();
            }
            guard.state.reset();
            debug_assert_cell(&guard);
            info!(caller, "Round cancelled by administrator");
        }
        self.sink.emit(RoundEvent::RoundCancelled);
    }

    /// Administrator pause/resume. Re-enabling only clears the disabled
    /// flag; an in-flight sub-state and its reservations survive the pause.
    pub async fn set_enabled(&self, caller: ParticipantId, enabled: bool) {
        let mut guard = self.cell.write().await;
        guard.state.enabled = enabled;
        info!(caller, enabled, "Game enabled flag updated");
    }

    /// Read-only snapshot; runs concurrently with other readers and never
    /// observes a torn round.
    pub async fn status(&self) -> RoundSnapshot {
        let guard = self.cell.read().await;
        RoundSnapshot::of(&guard.state)
    }

    /// Timer callback. Scheduling-time knowledge may be stale: an admin
    /// cancel or a disable may have landed in between, so everything is
    /// re-checked under the write lock at fire time.
    async fn fire_auto_draw(&self) {
        let event = {
            let mut guard = self.cell.write().await;
            if !guard.state.enabled {
                // The pending cooldown cannot resolve while the game is
                // paused; collapse it and keep every reservation.
                guard.timer = None;
                if guard.state.sub_phase == SubPhase::CooldownPending {
                    guard.state.sub_phase = SubPhase::Open;
                }
                debug_assert_cell(&guard);
                info!("Auto-draw skipped: game disabled");
                None
            } else if guard.state.sub_phase != SubPhase::CooldownPending {
                debug_assert!(guard.timer.is_none(), "stale timer handle left behind");
                debug!("Auto-draw skipped: round no longer pending");
                None
            } else {
                guard.timer = None;
                let (_, event) = self.draw_locked(&mut guard);
                debug_assert_cell(&guard);
                Some(event)
            }
        };

        if let Some(event) = event {
            self.sink.emit(event);
        }
    }

    /// Atomic resolution step. The caller holds the write lock; a winning
    /// draw clears the table and reopens the round before the lock is
    /// released, so no intermediate state is externally observable.
    fn draw_locked(&self, cell: &mut RoundCell) -> (DrawOutcome, RoundEvent) {
        let number = cell.source.sample(&self.config.domain);
        let resolution = resolve_draw(&mut cell.state, number);
        debug_assert_invariants(&cell.state, self.config.reservation_cap);

        if resolution.is_resolved() {
            info!(number, winners = resolution.winners.len(), "Draw resolved");
            (
                DrawOutcome::Resolved {
                    number,
                    winners: resolution.winners.clone(),
                },
                RoundEvent::DrawResolved {
                    number,
                    winners: resolution.winners,
                },
            )
        } else {
            info!(number, "Draw missed, awaiting reroll");
            (
                DrawOutcome::NoWinner { number },
                RoundEvent::DrawMissed { number },
            )
        }
    }
}

/// A cooldown sub-phase and an outstanding timer handle must come and go
/// together; drift between them means a locked section forgot one side.
fn debug_assert_cell(cell: &RoundCell) {
    debug_assert_eq!(
        cell.state.sub_phase == SubPhase::CooldownPending,
        cell.timer.is_some(),
        "cooldown sub-phase and timer handle out of sync"
    );
}
