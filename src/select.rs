//! Noisy choice of the nodes a move reroutes load between.

use crate::random::RandomSource;
use crate::rotation::RotatedRange;

/// Chance, in percent, that a strictly better candidate replaces the
/// running pick.
pub const UPDATE_PERCENT: usize = 95;

/// The pair of nodes a move acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    /// Receives too much load (large positive deviation).
    pub overloaded: usize,
    /// Receives too little load (small or negative deviation).
    pub underloaded: usize,
}

/// One biased coin: `true` with probability [`UPDATE_PERCENT`]%.
pub fn biased_update<R: RandomSource>(rng: &mut R) -> bool {
    rng.next_int(100) < UPDATE_PERCENT
}

/// Approximate arg-max and arg-min of `deviation`.
///
/// Draws a random initial guess for each (overloaded first), then a
/// random scan start, and walks the rotated order. A strictly better
/// node replaces the running pick only if [`biased_update`] agrees; a
/// coin is drawn only for strictly better nodes.
///
/// # Panics
/// Panics if `deviation` is empty.
pub fn select_candidates<R: RandomSource>(deviation: &[i64], rng: &mut R) -> Candidates {
    let n = deviation.len();
    let mut overloaded = rng.next_int(n);
    let mut underloaded = rng.next_int(n);

    for i in RotatedRange::random(rng, n) {
        if deviation[i] < deviation[underloaded] && biased_update(rng) {
            underloaded = i;
        }
        if deviation[i] > deviation[overloaded] && biased_update(rng) {
            overloaded = i;
        }
    }

    Candidates {
        overloaded,
        underloaded,
    }
}
