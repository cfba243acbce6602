//! Feedback text encoding
//!
//! A turn is entered as letter-digit pairs, one digit after each letter of the
//! guess: `0` grey, `1` yellow, `2` green, e.g. `c0r0a2n0e2`. A letter with no
//! digit after it counts as grey, so `cr1ane2` reads as `c0r1a0n0e2`.
//!
//! Shorthands:
//! - `crane!` the guess was correct (all green)
//! - `crane,slate` score `crane` against the answer `slate`

use crate::core::{Guess, LetterFeedback, WORD_LENGTH, Word};
use crate::error::SolverError;

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A guess with explicit feedback (at least one digit was given)
    Feedback(Guess),
    /// A bare word with no digits at all
    Word(Word),
    /// A guess to be scored against the given answer
    AutoScore { guess: Word, answer: Word },
}

/// Parse one line of feedback input
///
/// # Errors
///
/// Returns `SolverError::InvalidFeedback` if a digit other than 0, 1 or 2
/// follows a letter, if a character is neither a letter nor a digit, or if the
/// line does not hold exactly five letters. Returns `SolverError::InvalidWord`
/// if either half of a `guess,answer` pair is not a valid word.
///
/// # Examples
/// ```
/// use wordle_reducer::input::{Entry, parse_entry};
///
/// let Entry::Feedback(guess) = parse_entry("c0r0a2n0e2").unwrap() else {
///     panic!("expected feedback");
/// };
/// assert_eq!(guess.word().text(), "crane");
/// assert!(parse_entry("c0r3a2n0e2").is_err());
/// ```
pub fn parse_entry(input: &str) -> Result<Entry, SolverError> {
    let line = input.trim().to_ascii_lowercase();

    if let Some((guess, answer)) = line.split_once(',') {
        return Ok(Entry::AutoScore {
            guess: Word::new(guess.trim())?,
            answer: Word::new(answer.trim())?,
        });
    }

    if let Some(word) = line.strip_suffix('!') {
        return Ok(Entry::Feedback(Guess::solved(Word::new(word)?)));
    }

    let mut letters = String::with_capacity(WORD_LENGTH);
    let mut feedback = Vec::with_capacity(WORD_LENGTH);
    let mut saw_digit = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if !ch.is_ascii_lowercase() {
            return Err(SolverError::feedback(
                input,
                format!("unexpected character '{ch}'"),
            ));
        }
        letters.push(ch);

        let mark = match chars.peek() {
            Some(&digit) if digit.is_ascii_digit() => {
                chars.next();
                saw_digit = true;
                LetterFeedback::from_digit(digit).ok_or_else(|| {
                    SolverError::feedback(input, format!("invalid feedback digit '{digit}'"))
                })?
            }
            _ => LetterFeedback::Grey,
        };
        feedback.push(mark);
    }

    if letters.len() != WORD_LENGTH {
        return Err(SolverError::feedback(
            input,
            format!("expected {WORD_LENGTH} letters, got {}", letters.len()),
        ));
    }

    let word = Word::new(letters)?;
    if !saw_digit {
        return Ok(Entry::Word(word));
    }

    let mut marks = [LetterFeedback::Grey; WORD_LENGTH];
    marks.copy_from_slice(&feedback);
    Ok(Entry::Feedback(Guess::new(word, marks)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Green, Grey, Yellow};

    fn feedback(input: &str) -> Vec<LetterFeedback> {
        match parse_entry(input).unwrap() {
            Entry::Feedback(guess) => guess.scored().iter().map(|s| s.feedback).collect(),
            other => panic!("expected feedback, got {other:?}"),
        }
    }

    #[test]
    fn letter_digit_pairs() {
        assert_eq!(feedback("c0r1a2n0e0"), [Grey, Yellow, Green, Grey, Grey]);
        assert_eq!(feedback("  C0R1A2N0E0 "), [Grey, Yellow, Green, Grey, Grey]);
    }

    #[test]
    fn missing_digits_are_grey() {
        assert_eq!(feedback("cr1ane2"), [Grey, Yellow, Grey, Grey, Green]);
    }

    #[test]
    fn bare_word() {
        assert_eq!(
            parse_entry("crane").unwrap(),
            Entry::Word(Word::new("crane").unwrap())
        );
    }

    #[test]
    fn solved_shorthand() {
        assert_eq!(feedback("slate!"), [Green; WORD_LENGTH]);
    }

    #[test]
    fn auto_score_shorthand() {
        assert_eq!(
            parse_entry("crane,slate").unwrap(),
            Entry::AutoScore {
                guess: Word::new("crane").unwrap(),
                answer: Word::new("slate").unwrap(),
            }
        );
        assert!(parse_entry("crane,sl").is_err());
    }

    #[test]
    fn invalid_digit_is_rejected() {
        let err = parse_entry("c0r1a3n0e0").unwrap_err();
        assert!(matches!(err, SolverError::InvalidFeedback { .. }));
        assert!(err.to_string().contains("'3'"));
    }

    #[test]
    fn wrong_letter_count_is_rejected() {
        assert!(matches!(
            parse_entry("c0r1a2n0"),
            Err(SolverError::InvalidFeedback { .. })
        ));
        assert!(matches!(
            parse_entry("c0r1a2n0e0s0"),
            Err(SolverError::InvalidFeedback { .. })
        ));
        assert!(parse_entry("").is_err());
    }

    #[test]
    fn stray_characters_are_rejected() {
        assert!(parse_entry("c0r1-a2n0e0").is_err());
        assert!(parse_entry("0crane").is_err());
    }
}
