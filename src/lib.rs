//! Two-successor load balancing by noisy local search.
//!
//! Every node carries an integer demand and names two successors. The
//! demand a node routes into its successors should add up, per node, to
//! twice that node's own demand. The crate searches for an assignment
//! minimizing the total absolute deviation:
//!
//! - **Construction** ([`construct`]): cyclic baseline, demand-weighted
//!   priority order, per-restart seed candidates.
//! - **Scoring** ([`eval`]): full O(N) evaluation of an assignment.
//! - **Moves** ([`select`], [`mutate`]): a noisy arg-max/arg-min pick over
//!   a rotated scan, then a single-slot reassignment with an undo record.
//! - **Search** ([`search`]): an exploratory multi-restart phase followed
//!   by refinement with a fixed 5% inversion of the greedy decision.
//! - **Replay** ([`simulate`]): walks an assignment for `L` steps and
//!   reports realised visits.
//!
//! # Examples
//!
//! ```
//! use u_balance::search::{RefineBudget, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_restarts(5)
//!     .with_restart_iterations(100)
//!     .with_refine(RefineBudget::Iterations(200))
//!     .with_seed(7);
//! let output = u_balance::solve("3 6\n1 1 1\n", &config).unwrap();
//! assert_eq!(output.lines().count(), 3);
//! ```

pub mod assignment;
pub mod construct;
pub mod error;
pub mod eval;
pub mod instance;
pub mod mutate;
pub mod random;
pub mod rotation;
pub mod search;
pub mod select;
pub mod simulate;

pub use error::BalanceError;

use instance::Instance;
use search::{BalanceRunner, SearchConfig};

/// Parses an instance, runs the search, and formats the best assignment
/// as `N` lines of `succ1 succ2`.
pub fn solve(input: &str, config: &SearchConfig) -> Result<String, BalanceError> {
    let instance = Instance::parse(input)?;
    let result = BalanceRunner::run(&instance, config)?;
    Ok(result.best.to_string())
}
