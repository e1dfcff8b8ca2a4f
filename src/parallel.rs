//! Independent training runs on rayon's thread pool
//!
//! Each run owns its engine, tables and random source, so runs never share
//! mutable state; only the cancel token is common to all of them.

use crate::agent::Agent;
use crate::cancel::CancelToken;
use crate::ensemble::{EnsembleQLearning, QEnsemble};
use crate::error::Result;
use crate::logging::TracingLogger;
use crate::metrics::TrainingHistory;
use ndarray::parallel::prelude::*;

/// Result of one seeded run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub seed: u64,
    pub history: TrainingHistory,
    pub tables: QEnsemble,
}

/// Train one engine per seed in parallel
///
/// `build` constructs a fresh engine for a seed. Results come back in seed
/// order; a failing run does not stop the others.
pub fn train_seeds<A, F>(seeds: &[u64], build: F, cancel: &CancelToken) -> Vec<Result<RunOutcome>>
where
    A: Agent,
    F: Fn(u64) -> Result<EnsembleQLearning<A>> + Sync,
{
    seeds
        .par_iter()
        .map(|&seed| {
            let span = tracing::info_span!("run", seed);
            let _guard = span.enter();

            let mut engine = build(seed)?;
            let history = engine.learn(&mut TracingLogger, cancel)?;
            Ok(RunOutcome {
                seed,
                history,
                tables: engine.tables().clone(),
            })
        })
        .collect()
}

/// Run with the highest best return
pub fn best_run(outcomes: &[RunOutcome]) -> Option<&RunOutcome> {
    outcomes.iter().max_by(|a, b| {
        let a = a.history.best_return.unwrap_or(f64::NEG_INFINITY);
        let b = b.history.best_return.unwrap_or(f64::NEG_INFINITY);
        a.total_cmp(&b)
    })
}
