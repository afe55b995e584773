//! Deterministic draw source fed from a fixed script.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use engine::{DrawSource, Pick};

/// [`DrawSource`] that replays a fixed sequence of numbers.
///
/// Panics when the script runs dry or yields a number outside the domain;
/// both mean the test asked for more or different draws than it scripted.
pub struct ScriptedSource {
    script: VecDeque<Pick>,
}

impl ScriptedSource {
    pub fn new(script: &[Pick]) -> Self {
        Self {
            script: script.iter().copied().collect(),
        }
    }
}

impl DrawSource for ScriptedSource {
    fn sample(&mut self, domain: &RangeInclusive<Pick>) -> Pick {
        let number = self
            .script
            .pop_front()
            .expect("scripted draw source exhausted");
        assert!(
            domain.contains(&number),
            "scripted number {number} lies outside the domain {}..={}",
            domain.start(),
            domain.end()
        );
        number
    }
}
