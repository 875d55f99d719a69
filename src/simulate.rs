//! Walk replay.
//!
//! The demand-balance score is a proxy. The quantity it approximates is
//! produced by a walk of `L` steps starting at node 0: on its odd-numbered
//! visit to a node the walker moves to the node's first successor, on
//! even-numbered visits to the second. Each node wants to be visited
//! exactly `demand` times.

use crate::assignment::Assignment;
use crate::instance::Instance;

/// Outcome of replaying a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// Visits per node.
    pub visits: Vec<u64>,
    /// `sum_i |visits[i] - demand[i]|`.
    pub error: i64,
    /// `2L - error`. Higher is better; `2L` is a perfect walk.
    pub score: i64,
}

/// Replays the walk for `instance.budget()` steps.
///
/// # Panics
/// Panics if the assignment does not cover every node of the instance.
pub fn simulate(instance: &Instance, assignment: &Assignment) -> Simulation {
    assert_eq!(
        assignment.len(),
        instance.n(),
        "assignment and instance differ in length"
    );

    let mut visits = vec![0u64; instance.n()];
    let mut pos = 0usize;
    for _ in 0..instance.budget() {
        visits[pos] += 1;
        let [first, second] = assignment.pair(pos);
        pos = if visits[pos] % 2 == 1 { first } else { second };
    }

    // Exact for any `Instance`: L and the demand total are bounded at
    // construction.
    let budget = i64::try_from(instance.budget()).unwrap_or(i64::MAX);
    let error = visits
        .iter()
        .zip(instance.demands())
        .map(|(&v, &demand)| {
            i64::try_from(v)
                .unwrap_or(i64::MAX)
                .saturating_sub(demand)
                .saturating_abs()
        })
        .fold(0i64, i64::saturating_add);
    let score = budget.saturating_mul(2).saturating_sub(error);

    Simulation {
        visits,
        error,
        score,
    }
}
