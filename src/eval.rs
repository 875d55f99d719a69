//! Scoring.

use crate::assignment::Assignment;

/// Load picture of one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Sum of absolute deviations. Lower is better.
    pub score: i64,
    /// `work[i] - 2 * demand[i]` per node. Always sums to zero.
    pub deviation: Vec<i64>,
    /// Demand routed into each node through the slots that reference it.
    pub work: Vec<i64>,
}

/// Scores an assignment against the demands, O(N).
///
/// Every demand is counted once per slot, so twice in total, which is
/// why the deviations cancel out.
///
/// # Panics
/// Panics if the assignment and the demand vector differ in length.
///
/// # Examples
///
/// ```
/// use u_balance::assignment::Assignment;
/// use u_balance::eval::evaluate;
///
/// let a = Assignment::new(vec![[1, 1], [0, 0]]).unwrap();
/// let e = evaluate(&a, &[3, 5]);
/// assert_eq!(e.work, vec![10, 6]);
/// assert_eq!(e.deviation, vec![4, -4]);
/// assert_eq!(e.score, 8);
/// ```
pub fn evaluate(assignment: &Assignment, demands: &[i64]) -> Evaluation {
    assert_eq!(
        assignment.len(),
        demands.len(),
        "assignment and demands differ in length"
    );

    let mut work = vec![0i64; demands.len()];
    for (&[a, b], &demand) in assignment.pairs().iter().zip(demands) {
        work[a] += demand;
        work[b] += demand;
    }

    let deviation: Vec<i64> = work
        .iter()
        .zip(demands)
        .map(|(&w, &demand)| w - 2 * demand)
        .collect();
    let score = deviation.iter().map(|d| d.abs()).sum();

    Evaluation {
        score,
        deviation,
        work,
    }
}
