#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod protocol;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::game::GameConfig;
pub use domain::snapshot::RoundSnapshot;
pub use domain::state::{ParticipantId, Phase, Pick};
pub use error::AppError;
pub use errors::domain::{DrawError, PickError};
pub use errors::ErrorCode;
pub use infra::draw_source::{DrawSource, SeededSource, ThreadRngSource};
pub use infra::scheduler::{DrawHandle, DrawScheduler, TokioScheduler};
pub use protocol::events::{ChannelSink, NullSink, OutcomeSink, RoundEvent};
pub use services::round_engine::{DrawOutcome, RoundEngine};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
