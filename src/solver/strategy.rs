//! Guess ranking strategies
//!
//! Defines the Strategy trait and the closed set of strategies a game can be
//! configured with.

use super::frequency::LetterFrequencyStrategy;
use super::reduction::{ReductionSearch, SearchOptions};
use crate::config::{GameConfig, StrategyKind};
use crate::core::{Criteria, Word};
use crate::error::SolverError;
use crate::progress::ProgressObserver;
use rustc_hash::FxHashMap;

/// Everything a strategy may look at when ranking guesses
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    /// Words still consistent with every turn so far
    pub pool: &'a [Word],
    /// Constraints accumulated so far
    pub criteria: &'a Criteria,
    /// The full answer list
    pub answers: &'a [Word],
    /// The curated start-word list
    pub start_words: &'a [Word],
}

/// Result of ranking guesses
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// Nothing to suggest: the candidate-guess list was empty
    Empty,
    /// One or two possible answers remain; returned as-is, nothing was scored
    Trivial(Vec<Word>),
    /// Every candidate guess was scored; `best` holds the top guesses, sorted
    Scored {
        best: Vec<Word>,
        scores: FxHashMap<Word, f64>,
    },
}

impl Ranking {
    /// Suggested guesses, best first
    #[must_use]
    pub fn words(&self) -> &[Word] {
        match self {
            Self::Empty => &[],
            Self::Trivial(words) | Self::Scored { best: words, .. } => words,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words().is_empty()
    }

    /// Score of a guess, when scoring took place
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        match self {
            Self::Scored { scores, .. } => scores.get(word).copied(),
            _ => None,
        }
    }
}

/// A strategy for ranking the next guess
pub trait Strategy {
    /// Rank candidate guesses for the current turn
    ///
    /// # Errors
    ///
    /// Returns an error if the search was cancelled or could not start its
    /// workers.
    fn rank(
        &self,
        context: &SearchContext<'_>,
        progress: &dyn ProgressObserver,
    ) -> Result<Ranking, SolverError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Expected-remaining-candidates minimisation
    Reduction(ReductionSearch),
    /// Letter frequency maximisation
    LetterFrequency(LetterFrequencyStrategy),
}

impl StrategyType {
    /// Build the strategy named by `config`
    ///
    /// The reduction search gets its worker pool and `config.cancel` here.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ThreadPool` if the worker pool cannot be built.
    pub fn from_config(config: &GameConfig) -> Result<Self, SolverError> {
        Ok(match config.strategy {
            StrategyKind::Reduction => {
                let options = SearchOptions::default()
                    .with_parallelism(config.parallelism)
                    .with_cancel(config.cancel.clone());
                Self::Reduction(ReductionSearch::new(options)?)
            }
            StrategyKind::LetterFrequency => Self::LetterFrequency(LetterFrequencyStrategy),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Reduction(_) => StrategyKind::Reduction,
            Self::LetterFrequency(_) => StrategyKind::LetterFrequency,
        }
    }
}

impl Strategy for StrategyType {
    fn rank(
        &self,
        context: &SearchContext<'_>,
        progress: &dyn ProgressObserver,
    ) -> Result<Ranking, SolverError> {
        match self {
            Self::Reduction(s) => s.rank(context, progress),
            Self::LetterFrequency(s) => s.rank(context, progress),
        }
    }
}
