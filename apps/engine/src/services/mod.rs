//! Service layer: the lock-serialized engine over the pure domain.

pub mod round_engine;
