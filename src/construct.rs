//! Starting points for the search.
//!
//! - [`baseline`]: the cyclic fallback assignment that seeds the best
//!   known solution.
//! - [`priority_order`]: a demand-weighted round-robin sequence of nodes.
//! - [`seed_candidate`]: one restart's starting assignment, built from a
//!   shifted cycle and a shifted priority order.

use crate::assignment::Assignment;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Key increment applied to a node each time it is drawn from the
/// priority queue.
pub const DEFAULT_PRIORITY_PENALTY: i64 = 2500;

/// Node `i` feeds `(i+1) mod n` and `(i+2) mod n`.
///
/// # Examples
///
/// ```
/// use u_balance::construct::baseline;
///
/// assert_eq!(baseline(3).pairs(), &[[1, 2], [2, 0], [0, 1]]);
/// assert_eq!(baseline(1).pairs(), &[[0, 0]]);
/// ```
pub fn baseline(n: usize) -> Assignment {
    Assignment::from_pairs((0..n).map(|i| [(i + 1) % n, (i + 2) % n]).collect())
}

/// Weighted deficit round robin over the demands.
///
/// Repeatedly takes the node with the largest remaining weight (ties to
/// the smaller index), appends it, and puts it back with its weight
/// lowered by `penalty`. Runs `n` times.
///
/// The result always has length `n`. It is a permutation when the
/// demand spread (max minus min) is below `penalty`; otherwise a
/// dominant node can be drawn again before weaker ones.
///
/// # Examples
///
/// ```
/// use u_balance::construct::priority_order;
///
/// assert_eq!(priority_order(&[5, 9, 7], 2500), vec![1, 2, 0]);
/// assert_eq!(priority_order(&[10_000, 0, 0], 2500), vec![0, 0, 0]);
/// ```
pub fn priority_order(demands: &[i64], penalty: i64) -> Vec<usize> {
    let mut heap: BinaryHeap<Reverse<(i64, usize)>> = demands
        .iter()
        .enumerate()
        .map(|(node, &demand)| Reverse((-demand, node)))
        .collect();

    let mut order = Vec::with_capacity(demands.len());
    for _ in 0..demands.len() {
        let Some(Reverse((key, node))) = heap.pop() else {
            break;
        };
        order.push(node);
        heap.push(Reverse((key.saturating_add(penalty), node)));
    }
    order
}

/// Restart candidate for `offset`.
///
/// Pair `i` is `((i + offset + 1) mod n, order[(i - offset) mod n])`:
/// the first slot follows a shifted cycle, the second a shifted
/// priority order.
pub fn seed_candidate(order: &[usize], offset: usize) -> Assignment {
    let n = order.len();
    if n == 0 {
        return Assignment::from_pairs(Vec::new());
    }
    let shift = offset % n;
    Assignment::from_pairs(
        (0..n)
            .map(|i| [(i + shift + 1) % n, order[(i + n - shift) % n]])
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;

    #[test]
    fn test_baseline_two_nodes() {
        assert_eq!(baseline(2).pairs(), &[[1, 0], [0, 1]]);
    }

    #[test]
    fn test_baseline_every_node_referenced_twice() {
        let a = baseline(7);
        let mut refs = [0usize; 7];
        for &[x, y] in a.pairs() {
            refs[x] += 1;
            refs[y] += 1;
        }
        assert!(refs.iter().all(|&r| r == 2));
    }

    #[test]
    fn test_baseline_scored_for_real() {
        let e = evaluate(&baseline(3), &[1, 2, 3]);
        // work: node0 <- node1(2) + node2(3) = 5, node1 <- node0(1) + node2(3) = 4,
        // node2 <- node0(1) + node1(2) = 3
        assert_eq!(e.work, vec![5, 4, 3]);
        assert_eq!(e.deviation, vec![3, 0, -3]);
        assert_eq!(e.score, 6);
    }

    #[test]
    fn test_priority_order_ties_to_smaller_index() {
        assert_eq!(priority_order(&[4, 4, 4, 4], 2500), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_priority_order_permutation_when_spread_small() {
        let demands = [900, 100, 2400, 1500, 0, 2000];
        let mut order = priority_order(&demands, 2500);
        assert_eq!(order, vec![2, 5, 3, 0, 1, 4]);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_priority_order_repeats_dominant_node() {
        // 8000, 5500 and 3000 all outrank 1000.
        let order = priority_order(&[1000, 8000, 0, 500], 2500);
        assert_eq!(order, vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_priority_order_huge_penalty() {
        let big = crate::instance::MAX_TOTAL_DEMAND;
        assert_eq!(priority_order(&[big, 0, 0], i64::MAX), vec![0, 1, 2]);
        assert_eq!(priority_order(&[0], i64::MAX), vec![0]);
    }

    #[test]
    fn test_priority_order_empty() {
        assert!(priority_order(&[], 2500).is_empty());
    }

    #[test]
    fn test_seed_candidate_offset_zero() {
        let a = seed_candidate(&[2, 0, 1], 0);
        assert_eq!(a.pairs(), &[[1, 2], [2, 0], [0, 1]]);
    }

    #[test]
    fn test_seed_candidate_shifts_both_streams() {
        let order = [3, 1, 0, 2];
        let a = seed_candidate(&order, 1);
        // first: (i + 2) % 4, second: order[(i + 3) % 4]
        assert_eq!(a.pairs(), &[[2, 2], [3, 3], [0, 1], [1, 0]]);
    }

    #[test]
    fn test_seed_candidate_offset_beyond_n() {
        let order = [0, 1, 2];
        assert_eq!(seed_candidate(&order, 4), seed_candidate(&order, 1));
    }
}
