//! Autoplay commands
//!
//! Play whole games against a known answer.

use crate::core::Word;
use crate::error::SolverError;
use crate::progress::ProgressObserver;
use crate::solver::{AutoplayResult, GameState};

/// Autoplay from `start` until `answer` is found or the game gives up
///
/// # Errors
///
/// Returns an error if either word is invalid or a search cannot run.
pub fn autoplay_word(
    game: &mut GameState<'_>,
    start: &str,
    answer: &str,
    progress: &dyn ProgressObserver,
) -> Result<AutoplayResult, SolverError> {
    let start = Word::new(start)?;
    let answer = Word::new(answer)?;
    game.autoplay(start, answer, progress)
}

/// Find the start words that solve `answer` in the fewest guesses
///
/// With no `candidates` the vocabulary's start-word list is tried.
///
/// # Errors
///
/// Returns an error if any word is invalid or a search cannot run.
pub fn best_start(
    game: &mut GameState<'_>,
    answer: &str,
    candidates: &[String],
    progress: &dyn ProgressObserver,
) -> Result<Vec<AutoplayResult>, SolverError> {
    let answer = Word::new(answer)?;
    let starts = if candidates.is_empty() {
        game.vocabulary().start_words().to_vec()
    } else {
        candidates
            .iter()
            .map(|w| Word::new(w.as_str()))
            .collect::<Result<Vec<_>, _>>()?
    };
    game.best_start_words(&answer, &starts, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, StrategyKind};
    use crate::progress::NoProgress;
    use crate::wordlists::Vocabulary;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_slices(
            &["crane", "slate", "plate", "flame", "blame", "shame"],
            &["crane", "shame"],
        )
    }

    #[test]
    fn autoplay_by_name() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, GameConfig::new(StrategyKind::Reduction)).unwrap();

        let result = autoplay_word(&mut game, "CRANE", "slate", &NoProgress).unwrap();

        assert!(result.solved);
        assert_eq!(result.answer.text(), "slate");
    }

    #[test]
    fn autoplay_rejects_bad_word() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, GameConfig::default()).unwrap();

        let err = autoplay_word(&mut game, "cran", "slate", &NoProgress).unwrap_err();
        assert!(matches!(err, SolverError::InvalidWord(_)));
    }

    #[test]
    fn best_start_uses_vocabulary_list_by_default() {
        let vocab = vocabulary();
        let config = GameConfig::new(StrategyKind::LetterFrequency);
        let mut game = GameState::new(&vocab, config).unwrap();

        let best = best_start(&mut game, "shame", &[], &NoProgress).unwrap();

        assert_eq!(best.len(), 1);
        assert_eq!(best[0].turns, 1);
    }

    #[test]
    fn best_start_with_explicit_words() {
        let vocab = vocabulary();
        let config = GameConfig::new(StrategyKind::LetterFrequency);
        let mut game = GameState::new(&vocab, config).unwrap();

        let words = vec!["slate".to_string(), "crane".to_string()];
        let best = best_start(&mut game, "slate", &words, &NoProgress).unwrap();

        assert_eq!(best[0].guesses[0].text(), "slate");
    }
}
