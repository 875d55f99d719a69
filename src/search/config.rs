//! Search configuration.

use crate::construct::DEFAULT_PRIORITY_PENALTY;
use crate::error::BalanceError;
use std::time::Duration;

/// How long the refinement phase runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefineBudget {
    /// A fixed number of refinement steps. Deterministic for a given seed.
    Iterations(usize),

    /// Until this much wall-clock time has passed since the run started.
    ///
    /// The clock is read every 128 steps, so the phase may overrun by up
    /// to that many steps.
    Deadline(Duration),
}

impl Default for RefineBudget {
    fn default() -> Self {
        RefineBudget::Iterations(2000)
    }
}

/// Configuration for [`BalanceRunner`](super::BalanceRunner).
///
/// # Examples
///
/// ```
/// use u_balance::search::{RefineBudget, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_restarts(10)
///     .with_restart_iterations(200)
///     .with_refine(RefineBudget::Iterations(500))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of exploratory restarts (one per rotation offset).
    pub restarts: usize,

    /// Greedy mutations per restart.
    pub restart_iterations: usize,

    /// Refinement phase budget.
    pub refine: RefineBudget,

    /// Key increment used when building the priority order.
    pub priority_penalty: i64,

    /// Random seed for reproducibility. `None` draws one per run.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            restarts: 80,
            restart_iterations: 1000,
            refine: RefineBudget::default(),
            priority_penalty: DEFAULT_PRIORITY_PENALTY,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_restart_iterations(mut self, n: usize) -> Self {
        self.restart_iterations = n;
        self
    }

    pub fn with_refine(mut self, budget: RefineBudget) -> Self {
        self.refine = budget;
        self
    }

    pub fn with_priority_penalty(mut self, penalty: i64) -> Self {
        self.priority_penalty = penalty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BalanceError> {
        if self.priority_penalty <= 0 {
            return Err(BalanceError::InvalidConfig(format!(
                "priority_penalty must be positive, got {}",
                self.priority_penalty
            )));
        }
        if let RefineBudget::Deadline(limit) = self.refine {
            if limit.is_zero() {
                return Err(BalanceError::InvalidConfig(
                    "refine deadline must be non-zero".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.restarts, 80);
        assert_eq!(config.restart_iterations, 1000);
        assert_eq!(config.refine, RefineBudget::Iterations(2000));
        assert_eq!(config.priority_penalty, 2500);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_penalty() {
        let config = SearchConfig::default().with_priority_penalty(0);
        assert!(matches!(
            config.validate(),
            Err(BalanceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_deadline() {
        let config = SearchConfig::default().with_refine(RefineBudget::Deadline(Duration::ZERO));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_budgets_are_valid() {
        let config = SearchConfig::default()
            .with_restarts(0)
            .with_restart_iterations(0)
            .with_refine(RefineBudget::Iterations(0));
        assert!(config.validate().is_ok());
    }
}
