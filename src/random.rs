//! Random draws used by the search.
//!
//! Every stochastic decision goes through [`RandomSource::next_int`], so
//! a run is fully determined by the draw sequence. Production runs use a
//! seeded [`StdRng`]; tests substitute a scripted source to force
//! specific branches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform integer draws.
pub trait RandomSource {
    /// Returns a uniform integer in `0..bound`.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    fn next_int(&mut self, bound: usize) -> usize;
}

impl RandomSource for StdRng {
    fn next_int(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed list of draws. Panics when the script runs out or a
/// draw does not fit the requested bound.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    draws: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.draws.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        let value = self.draws.pop_front().expect("scripted draws exhausted");
        assert!(value < bound, "scripted draw {value} out of bound {bound}");
        value
    }
}
