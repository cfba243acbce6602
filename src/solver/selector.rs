//! Best-guess selection
//!
//! Both strategies produce a guess → score map. The selector keeps every guess
//! that reaches the extremal score and sorts them, so the same inputs always
//! give the same suggestion list.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Whether lower or higher scores are better
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Minimize,
    Maximize,
}

/// Select every guess with the best score, sorted alphabetically
///
/// If `scores` is empty, falls back to the first word of `fallback` (the
/// possible answers), so a caller with any possible answer left always gets a
/// suggestion.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_reducer::core::Word;
/// use wordle_reducer::solver::{Objective, select_best};
///
/// let mut scores = FxHashMap::default();
/// scores.insert(Word::new("slate").unwrap(), 1.0);
/// scores.insert(Word::new("crane").unwrap(), 1.0);
/// scores.insert(Word::new("audio").unwrap(), 3.0);
///
/// let best = select_best(&scores, Objective::Minimize, &[]);
/// assert_eq!(best[0].text(), "crane");
/// assert_eq!(best[1].text(), "slate");
/// ```
#[must_use]
pub fn select_best(
    scores: &FxHashMap<Word, f64>,
    objective: Objective,
    fallback: &[Word],
) -> Vec<Word> {
    let extremal = match objective {
        Objective::Minimize => scores.values().copied().min_by(f64::total_cmp),
        Objective::Maximize => scores.values().copied().max_by(f64::total_cmp),
    };

    let Some(target) = extremal else {
        return fallback.iter().take(1).cloned().collect();
    };

    let mut best: Vec<Word> = scores
        .iter()
        .filter(|&(_, &score)| score.total_cmp(&target).is_eq())
        .map(|(word, _)| word.clone())
        .collect();
    best.sort_unstable();
    best
}
