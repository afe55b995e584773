//! Uniform sampling seam for draws.
//!
//! Fairness, not security, is the requirement: the production source uses
//! the thread-local generator, and a seeded source is available when
//! reproducible draw sequences are wanted.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::state::Pick;

/// Source of drawn numbers. Implementations must sample uniformly over the
/// domain.
pub trait DrawSource: Send + Sync {
    fn sample(&mut self, domain: &RangeInclusive<Pick>) -> Pick;
}

/// Samples from the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl DrawSource for ThreadRngSource {
    fn sample(&mut self, domain: &RangeInclusive<Pick>) -> Pick {
        rand::rng().random_range(domain.clone())
    }
}

/// Deterministic source seeded once; the same seed yields the same draw
/// sequence.
#[derive(Debug)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DrawSource for SeededSource {
    fn sample(&mut self, domain: &RangeInclusive<Pick>) -> Pick {
        self.rng.random_range(domain.clone())
    }
}
