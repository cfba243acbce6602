//! Per-guess reduction scoring
//!
//! Single-threaded building blocks; `search` fans these out over guesses.

use crate::core::{Criteria, Word, score};

/// Number of `pool` words left if `guess` is played and `answer` is the truth
///
/// The base criteria are cloned for the hypothesis and never modified.
///
/// # Examples
/// ```
/// use wordle_reducer::core::{Criteria, Word};
/// use wordle_reducer::solver::reduction::remaining_after;
/// use wordle_reducer::wordlists::loader::words_from_slice;
///
/// let pool = words_from_slice(&["crane", "slate", "train", "grape", "frape", "dream"]);
/// let guess = Word::new("salet").unwrap();
/// let answer = Word::new("crane").unwrap();
///
/// assert_eq!(remaining_after(&guess, &answer, &pool, &Criteria::new()), 4);
/// ```
#[must_use]
pub fn remaining_after(guess: &Word, answer: &Word, pool: &[Word], base: &Criteria) -> usize {
    let hypothetical = base.update(&score(guess, answer));
    hypothetical.count_matches(pool)
}

/// Average number of `pool` words left after playing `guess`
///
/// Every pool word is taken as the answer once. An empty pool scores
/// `f64::MAX`, the worst possible value.
#[must_use]
pub fn expected_remaining(guess: &Word, pool: &[Word], base: &Criteria) -> f64 {
    if pool.is_empty() {
        return f64::MAX;
    }

    let total: usize = pool
        .iter()
        .map(|answer| remaining_after(guess, answer, pool, base))
        .sum();

    total as f64 / pool.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn scenario_pool_scores() {
        let pool = words_from_slice(&["apple", "apply", "artsy"]);
        let base = Criteria::new();

        assert!((expected_remaining(&word("crane"), &pool, &base) - 1.0).abs() < f64::EPSILON);
        assert!((expected_remaining(&word("slate"), &pool, &base) - 1.0).abs() < f64::EPSILON);
        assert!((expected_remaining(&word("audio"), &pool, &base) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn true_answer_is_always_counted() {
        let pool = words_from_slice(&["apple", "apply", "artsy", "crane", "slate", "speed"]);
        let base = Criteria::new();

        for guess in &pool {
            for answer in &pool {
                assert!(remaining_after(guess, answer, &pool, &base) >= 1);
            }
        }
    }

    #[test]
    fn respects_base_criteria() {
        let pool = words_from_slice(&["apple", "apply", "artsy"]);
        // After AUDIO against any of them only A is known
        let base = Criteria::new().update(&score(&word("audio"), &word("apple")));

        assert_eq!(remaining_after(&word("zzzzz"), &word("apple"), &pool, &base), 3);
        assert_eq!(remaining_after(&word("apple"), &word("apple"), &pool, &base), 1);
    }

    #[test]
    fn empty_pool_gets_sentinel() {
        assert_eq!(expected_remaining(&word("crane"), &[], &Criteria::new()), f64::MAX);
    }
}
