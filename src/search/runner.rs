//! Two-phase search execution.
//!
//! # Algorithm
//!
//! 1. Score the cyclic baseline; it is the initial best.
//! 2. Explore: for each restart offset, build a seed candidate and take
//!    a fixed number of greedy mutations without rollback, offering
//!    every visited assignment to the best.
//! 3. Refine: continue from the best, keeping a mutation exactly when
//!    `improved XOR fluke`, where a fluke is a 5% draw. Rejected
//!    mutations are rolled back.

use super::best::BestSolution;
use super::config::{RefineBudget, SearchConfig};
use crate::assignment::Assignment;
use crate::construct::{baseline, priority_order, seed_candidate};
use crate::error::BalanceError;
use crate::eval::{evaluate, Evaluation};
use crate::instance::Instance;
use crate::mutate::apply_mutation;
use crate::random::{create_rng, RandomSource};
use crate::rotation::RotatedRange;
use crate::select::{select_candidates, UPDATE_PERCENT};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Refinement steps between clock reads in deadline mode.
const DEADLINE_CHECK_INTERVAL: usize = 128;

/// Refinement steps between score-history samples.
const HISTORY_INTERVAL: usize = 100;

/// Result of a search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The best assignment found.
    pub best: Assignment,

    /// Score of the best assignment.
    pub best_score: i64,

    /// Score of the cyclic baseline the search started from.
    pub baseline_score: i64,

    /// Seed the run was started with, when the runner created the generator.
    pub seed: Option<u64>,

    /// Number of full evaluations.
    pub evaluations: usize,

    /// Exploratory restarts completed.
    pub restarts: usize,

    /// Refinement steps taken, including skipped ones.
    pub refine_steps: usize,

    /// Refinement mutations kept.
    pub accepted_moves: usize,

    /// Refinement mutations rolled back.
    pub rejected_moves: usize,

    /// Refinement decisions inverted by the 5% draw.
    pub flukes: usize,

    /// Mutations that found no slot to change.
    pub skipped_moves: usize,

    /// Times the best solution improved.
    pub improvements: usize,

    /// Best score after the baseline, after each restart, every 100
    /// refinement steps, and at the end.
    pub score_history: Vec<i64>,
}

#[derive(Debug, Default)]
struct Counters {
    evaluations: usize,
    refine_steps: usize,
    accepted_moves: usize,
    rejected_moves: usize,
    flukes: usize,
    skipped_moves: usize,
}

/// Executes the search.
pub struct BalanceRunner;

impl BalanceRunner {
    /// Runs the search with a generator seeded from `config.seed`, or
    /// from a fresh random seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_balance::instance::Instance;
    /// use u_balance::search::{BalanceRunner, RefineBudget, SearchConfig};
    ///
    /// let instance = Instance::new(vec![4, 1, 1, 2], 8).unwrap();
    /// let config = SearchConfig::default()
    ///     .with_restarts(4)
    ///     .with_restart_iterations(50)
    ///     .with_refine(RefineBudget::Iterations(100))
    ///     .with_seed(1);
    /// let result = BalanceRunner::run(&instance, &config).unwrap();
    /// assert!(result.best_score <= result.baseline_score);
    /// ```
    pub fn run(instance: &Instance, config: &SearchConfig) -> Result<SearchResult, BalanceError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        debug!(seed, "seeding search");
        let mut rng = create_rng(seed);
        let mut result = Self::run_with_source(instance, config, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs the search drawing from `rng`. `config.seed` is ignored.
    pub fn run_with_source<R: RandomSource>(
        instance: &Instance,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult, BalanceError> {
        Self::run_observed(instance, config, rng, |_, _| {})
    }

    /// Like [`run_with_source`](Self::run_with_source), calling
    /// `observe(score, best_score)` after every full evaluation.
    ///
    /// `best_score` is the tracked best once the evaluated assignment has
    /// been offered to it. Refinement offers its current assignment at the
    /// start of the next step, so an accepted improvement shows up in
    /// `best_score` one observation later. There is exactly one call per
    /// counted evaluation.
    pub fn run_observed<R, F>(
        instance: &Instance,
        config: &SearchConfig,
        rng: &mut R,
        mut observe: F,
    ) -> Result<SearchResult, BalanceError>
    where
        R: RandomSource,
        F: FnMut(i64, i64),
    {
        config.validate()?;
        let started = Instant::now();
        let demands = instance.demands();
        let mut counters = Counters::default();

        let start = baseline(instance.n());
        let baseline_score = evaluate(&start, demands).score;
        counters.evaluations += 1;
        let mut best = BestSolution::new(start, baseline_score);
        observe(baseline_score, best.score());
        let mut score_history = vec![baseline_score];

        // Phase 1: exploration
        let order = priority_order(demands, config.priority_penalty);
        for offset in 0..config.restarts {
            let mut candidate = seed_candidate(&order, offset);
            explore(
                demands,
                &mut candidate,
                config.restart_iterations,
                rng,
                &mut best,
                &mut counters,
                &mut observe,
            );
            score_history.push(best.score());
            debug!(restart = offset, best_score = best.score(), "restart finished");
        }
        info!(
            restarts = config.restarts,
            best_score = best.score(),
            baseline_score,
            "exploration finished"
        );

        // Phase 2: refinement
        let mut refiner = Refiner::new(demands, best.assignment().clone());
        counters.evaluations += 1;
        observe(refiner.score(), best.score());
        let mut step = 0usize;
        loop {
            match config.refine {
                RefineBudget::Iterations(limit) => {
                    if step >= limit {
                        break;
                    }
                }
                RefineBudget::Deadline(limit) => {
                    if step % DEADLINE_CHECK_INTERVAL == 0 && started.elapsed() >= limit {
                        break;
                    }
                }
            }

            match refiner.step(rng, &mut best, &mut observe) {
                StepOutcome::Skipped => counters.skipped_moves += 1,
                StepOutcome::Accepted { improved } => {
                    counters.evaluations += 1;
                    counters.accepted_moves += 1;
                    if !improved {
                        counters.flukes += 1;
                    }
                }
                StepOutcome::Rejected { improved } => {
                    counters.evaluations += 1;
                    counters.rejected_moves += 1;
                    if improved {
                        counters.flukes += 1;
                    }
                }
            }
            step += 1;
            if step % HISTORY_INTERVAL == 0 {
                score_history.push(best.score());
            }
        }
        refiner.offer(&mut best);
        counters.refine_steps = step;
        score_history.push(best.score());
        info!(
            steps = step,
            accepted = counters.accepted_moves,
            rejected = counters.rejected_moves,
            flukes = counters.flukes,
            best_score = best.score(),
            "refinement finished"
        );

        Ok(SearchResult {
            best_score: best.score(),
            improvements: best.improvements(),
            best: best.into_assignment(),
            baseline_score,
            seed: None,
            evaluations: counters.evaluations,
            restarts: config.restarts,
            refine_steps: counters.refine_steps,
            accepted_moves: counters.accepted_moves,
            rejected_moves: counters.rejected_moves,
            flukes: counters.flukes,
            skipped_moves: counters.skipped_moves,
            score_history,
        })
    }
}

/// One exploratory walk: mutate unconditionally, offering every visited
/// assignment to `best`.
fn explore<R: RandomSource, F: FnMut(i64, i64)>(
    demands: &[i64],
    candidate: &mut Assignment,
    iterations: usize,
    rng: &mut R,
    best: &mut BestSolution,
    counters: &mut Counters,
    observe: &mut F,
) {
    let n = demands.len();
    for _ in 0..iterations {
        let evaluation = evaluate(candidate, demands);
        counters.evaluations += 1;
        if best.try_update(candidate, evaluation.score) {
            trace!(score = evaluation.score, "new best while exploring");
        }
        observe(evaluation.score, best.score());

        let picked = select_candidates(&evaluation.deviation, rng);
        let scan = RotatedRange::random(rng, n);
        if apply_mutation(candidate, picked.overloaded, picked.underloaded, scan).is_none() {
            counters.skipped_moves += 1;
        }
    }

    let last = evaluate(candidate, demands);
    counters.evaluations += 1;
    best.try_update(candidate, last.score);
    observe(last.score, best.score());
}

/// The 5% inversion of a greedy decision.
///
/// Keeps the move exactly when `improved` and the fluke draw disagree:
/// improvements are normally kept, and one draw in twenty flips the
/// decision either way.
pub(crate) fn accept_move<R: RandomSource>(improved: bool, rng: &mut R) -> bool {
    let fluke = rng.next_int(100) >= UPDATE_PERCENT;
    improved ^ fluke
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// The overloaded node had no slot to give up.
    Skipped,
    Accepted { improved: bool },
    Rejected { improved: bool },
}

/// Refinement state: the current assignment and its evaluation.
pub(crate) struct Refiner<'a> {
    demands: &'a [i64],
    current: Assignment,
    evaluation: Evaluation,
}

impl<'a> Refiner<'a> {
    pub(crate) fn new(demands: &'a [i64], current: Assignment) -> Self {
        let evaluation = evaluate(&current, demands);
        Self {
            demands,
            current,
            evaluation,
        }
    }

    pub(crate) fn score(&self) -> i64 {
        self.evaluation.score
    }

    #[cfg(test)]
    fn current(&self) -> &Assignment {
        &self.current
    }

    pub(crate) fn offer(&self, best: &mut BestSolution) -> bool {
        best.try_update(&self.current, self.evaluation.score)
    }

    /// One refinement step. A rejected mutation leaves both the
    /// assignment and the evaluation as they were.
    pub(crate) fn step<R, F>(&mut self, rng: &mut R, best: &mut BestSolution, observe: &mut F) -> StepOutcome
    where
        R: RandomSource,
        F: FnMut(i64, i64),
    {
        if self.offer(best) {
            trace!(score = self.evaluation.score, "new best while refining");
        }

        let n = self.demands.len();
        let picked = select_candidates(&self.evaluation.deviation, rng);
        let scan = RotatedRange::random(rng, n);
        let Some(undo) = apply_mutation(&mut self.current, picked.overloaded, picked.underloaded, scan)
        else {
            return StepOutcome::Skipped;
        };

        let next = evaluate(&self.current, self.demands);
        observe(next.score, best.score());
        let improved = next.score < self.evaluation.score;
        if accept_move(improved, rng) {
            self.evaluation = next;
            StepOutcome::Accepted { improved }
        } else {
            undo.revert(&mut self.current);
            StepOutcome::Rejected { improved }
        }
    }
}
