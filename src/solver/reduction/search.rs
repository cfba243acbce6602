//! Parallel reduction search
//!
//! One unit of work per candidate guess, run on a rayon pool that is built
//! once per `ReductionSearch` and reused for every turn. Workers
//! only read the shared pool and criteria, each score is produced exactly once
//! by the worker that owns the guess, and the scores are collected into a map,
//! so the result does not depend on thread count or completion order.

use super::calculator::expected_remaining;
use crate::config::available_parallelism;
use crate::core::{Criteria, Word};
use crate::error::SolverError;
use crate::progress::ProgressObserver;
use crate::solver::selector::{Objective, select_best};
use crate::solver::strategy::{Ranking, SearchContext, Strategy};
use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Shared flag for abandoning a running search
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Settings a `ReductionSearch` is built from
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Worker threads; `None` uses every core
    pub parallelism: Option<usize>,
    pub cancel: CancelToken,
}

impl SearchOptions {
    #[must_use]
    pub fn with_parallelism(mut self, threads: Option<usize>) -> Self {
        self.parallelism = threads;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Effective worker count, never zero
    #[must_use]
    pub fn threads(&self) -> usize {
        self.parallelism.unwrap_or_else(available_parallelism).max(1)
    }
}

/// Pick the words worth trying as guesses
///
/// While the pool is no larger than the start-word list, only live candidates
/// are tried. Before that, the whole answer list is tried, which lets the
/// search pick an information-only guess that cannot itself be the answer.
#[must_use]
pub fn candidate_guesses<'a>(
    pool: &'a [Word],
    answers: &'a [Word],
    start_words: &[Word],
) -> &'a [Word] {
    if !pool.is_empty() && pool.len() <= start_words.len() {
        pool
    } else {
        answers
    }
}

/// Score every guess by expected remaining candidates on `workers`
///
/// # Errors
///
/// Returns `SolverError::Cancelled` if `cancel` is set before every guess is
/// scored. Partial scores are discarded.
pub fn score_guesses(
    guesses: &[Word],
    pool: &[Word],
    base: &Criteria,
    workers: &ThreadPool,
    cancel: &CancelToken,
    progress: &dyn ProgressObserver,
) -> Result<FxHashMap<Word, f64>, SolverError> {
    debug!(
        "scoring {} guesses against {} candidates on {} threads",
        guesses.len(),
        pool.len(),
        workers.current_num_threads()
    );
    progress.start(guesses.len(), "Scoring candidate guesses...");
    let processed = AtomicUsize::new(0);

    let scores = workers.install(|| {
        guesses
            .par_iter()
            .map(|guess| {
                if cancel.is_cancelled() {
                    return Err(SolverError::Cancelled);
                }
                let score = expected_remaining(guess, pool, base);
                let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                progress.update(done, guess.text());
                Ok((guess.clone(), score))
            })
            .collect::<Result<FxHashMap<_, _>, _>>()
    })?;

    progress.complete("Finished scoring all candidate guesses.");
    Ok(scores)
}

/// Strategy that minimises the expected number of remaining candidates
///
/// Clones share the worker pool and the cancel token.
#[derive(Debug, Clone)]
pub struct ReductionSearch {
    workers: Arc<ThreadPool>,
    cancel: CancelToken,
}

impl ReductionSearch {
    /// Build the worker pool for `options`
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ThreadPool` if the pool cannot be built.
    pub fn new(options: SearchOptions) -> Result<Self, SolverError> {
        let threads = options.threads();
        let workers = ThreadPoolBuilder::new().num_threads(threads).build()?;
        debug!("reduction search ready on {threads} threads");

        Ok(Self {
            workers: Arc::new(workers),
            cancel: options.cancel,
        })
    }

    /// Rank an explicit list of guesses against `pool`
    ///
    /// A pool of one or two words is returned sorted without scoring anything.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Cancelled` if the search was cancelled.
    pub fn rank_guesses(
        &self,
        guesses: &[Word],
        pool: &[Word],
        base: &Criteria,
        progress: &dyn ProgressObserver,
    ) -> Result<Ranking, SolverError> {
        if (1..=2).contains(&pool.len()) {
            progress.start(1, "Small list, returning directly.");
            progress.increment_by_one();
            progress.complete("Direct return complete.");

            let mut words = pool.to_vec();
            words.sort_unstable();
            return Ok(Ranking::Trivial(words));
        }

        if guesses.is_empty() {
            progress.start(1, "No candidate guesses found.");
            progress.increment_by_one();
            progress.complete("No candidates, returning empty.");
            return Ok(Ranking::Empty);
        }

        let scores = score_guesses(
            guesses,
            pool,
            base,
            &self.workers,
            &self.cancel,
            progress,
        )?;
        let best = select_best(&scores, Objective::Minimize, pool);

        if let Some(first) = best.first() {
            info!(
                "best of {} guesses: {first} ({:.3} expected remaining, {} tied)",
                scores.len(),
                scores.get(first).copied().unwrap_or(f64::MAX),
                best.len()
            );
        }

        Ok(Ranking::Scored { best, scores })
    }
}

impl Strategy for ReductionSearch {
    fn rank(
        &self,
        context: &SearchContext<'_>,
        progress: &dyn ProgressObserver,
    ) -> Result<Ranking, SolverError> {
        let guesses = candidate_guesses(context.pool, context.answers, context.start_words);
        self.rank_guesses(guesses, context.pool, context.criteria, progress)
    }
}
