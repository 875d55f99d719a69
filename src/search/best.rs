//! Best-known solution.

use crate::assignment::Assignment;

/// The lowest-scoring assignment seen so far.
///
/// Only [`try_update`](BestSolution::try_update) changes it, and only on
/// a strictly lower score, so the score never increases.
#[derive(Debug, Clone)]
pub struct BestSolution {
    assignment: Assignment,
    score: i64,
    improvements: usize,
}

impl BestSolution {
    pub fn new(assignment: Assignment, score: i64) -> Self {
        Self {
            assignment,
            score,
            improvements: 0,
        }
    }

    /// Copies `candidate` in if `score` beats the current best.
    ///
    /// Returns whether it did.
    pub fn try_update(&mut self, candidate: &Assignment, score: i64) -> bool {
        if score >= self.score {
            return false;
        }
        self.assignment.clone_from(candidate);
        self.score = score;
        self.improvements += 1;
        true
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of successful updates.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(pairs: Vec<[usize; 2]>) -> Assignment {
        Assignment::new(pairs).unwrap()
    }

    #[test]
    fn test_strictly_lower_replaces() {
        let mut best = BestSolution::new(assignment(vec![[1, 1], [0, 0]]), 10);
        let better = assignment(vec![[0, 1], [0, 1]]);
        assert!(best.try_update(&better, 4));
        assert_eq!(best.score(), 4);
        assert_eq!(best.assignment(), &better);
        assert_eq!(best.improvements(), 1);
    }

    #[test]
    fn test_equal_score_is_ignored() {
        let start = assignment(vec![[1, 1], [0, 0]]);
        let mut best = BestSolution::new(start.clone(), 10);
        assert!(!best.try_update(&assignment(vec![[0, 0], [1, 1]]), 10));
        assert_eq!(best.assignment(), &start);
        assert_eq!(best.improvements(), 0);
    }

    #[test]
    fn test_worse_score_is_ignored() {
        let mut best = BestSolution::new(assignment(vec![[0, 0]]), 0);
        assert!(!best.try_update(&assignment(vec![[0, 0]]), 3));
        assert_eq!(best.score(), 0);
    }
}
