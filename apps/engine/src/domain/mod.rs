//! Domain layer: pure round logic, no locking, timers, or I/O.

pub mod draw;
pub mod picks;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_draw;
#[cfg(test)]
mod tests_props_round;

// Re-exports for ergonomics
pub use draw::{resolve_draw, DrawResolution};
pub use picks::{distinct_participants, holder_of, picks_of, reserve};
pub use snapshot::RoundSnapshot;
pub use state::{ParticipantId, Phase, Pick, RoundState, SubPhase};
