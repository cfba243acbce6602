//! One-shot lookups
//!
//! Score a single guess, or list the answer words holding a letter.

use crate::core::{Guess, Word};
use crate::error::SolverError;
use crate::wordlists::Vocabulary;

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns `SolverError::InvalidWord` if either word is invalid.
pub fn score_words(guess: &str, answer: &str) -> Result<Guess, SolverError> {
    let answer = Word::new(answer)?;
    Ok(Guess::scored_against(Word::new(guess)?, &answer))
}

/// Answer words containing `letter`, in vocabulary order
///
/// # Errors
///
/// Returns `SolverError::InvalidLetter` if `letter` is not an ASCII letter.
pub fn words_with_letter(
    vocabulary: &Vocabulary,
    letter: char,
) -> Result<Vec<&Word>, SolverError> {
    if !letter.is_ascii_alphabetic() {
        return Err(SolverError::InvalidLetter(letter));
    }
    #[allow(clippy::cast_possible_truncation)]
    let letter = letter.to_ascii_lowercase() as u8;
    Ok(vocabulary.words_containing(letter))
}
