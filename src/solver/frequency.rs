//! Letter frequency strategy
//!
//! Scores each live candidate by how common its letters are across the pool.
//! No lookahead, so it is far cheaper than the reduction search.

use super::selector::{Objective, select_best};
use super::strategy::{Ranking, SearchContext, Strategy};
use crate::core::Word;
use crate::error::SolverError;
use crate::progress::ProgressObserver;
use rustc_hash::FxHashMap;

/// Ranks pool words by summed letter frequency, highest first
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterFrequencyStrategy;

/// Number of pool words containing each letter, counted once per word
#[must_use]
pub fn letter_frequencies(pool: &[Word]) -> [usize; 26] {
    let mut counts = [0; 26];
    for word in pool {
        for letter in word.letters().iter() {
            counts[usize::from(letter - b'a')] += 1;
        }
    }
    counts
}

/// Sum of the frequencies of a word's distinct letters
#[must_use]
pub fn frequency_score(word: &Word, frequencies: &[usize; 26]) -> usize {
    word.letters()
        .iter()
        .map(|letter| frequencies[usize::from(letter - b'a')])
        .sum()
}

impl Strategy for LetterFrequencyStrategy {
    fn rank(
        &self,
        context: &SearchContext<'_>,
        progress: &dyn ProgressObserver,
    ) -> Result<Ranking, SolverError> {
        if context.pool.is_empty() {
            return Ok(Ranking::Empty);
        }

        progress.start(context.pool.len(), "Counting letter frequencies...");
        let frequencies = letter_frequencies(context.pool);

        #[allow(clippy::cast_precision_loss)]
        let scores: FxHashMap<Word, f64> = context
            .pool
            .iter()
            .map(|word| (word.clone(), frequency_score(word, &frequencies) as f64))
            .collect();

        progress.update(context.pool.len(), "");
        progress.complete("Letter frequencies ranked.");

        let best = select_best(&scores, Objective::Maximize, context.pool);
        Ok(Ranking::Scored { best, scores })
    }
}
