//! Two-phase randomized local search.
//!
//! An exploratory phase of independent short random walks, each started
//! from a different rotation of the constructed seed, followed by a
//! single refinement walk from the best assignment found. Refinement
//! keeps a move when it improves the score, except that a fixed 5% draw
//! inverts the decision, which lets the walk leave local optima.

mod best;
mod config;
mod runner;

pub use best::BestSolution;
pub use config::{RefineBudget, SearchConfig};
pub use runner::{BalanceRunner, SearchResult};
