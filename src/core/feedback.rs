//! Wordle feedback scoring
//!
//! Each letter of a guess is classified against the answer:
//! - Grey (0): no unconsumed occurrence of the letter is left in the answer
//! - Yellow (1): the letter occurs at another, not yet consumed position
//! - Green (2): the letter is in the correct position
//!
//! The digit values double as the text encoding used by the `input` module.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Grey,
    Yellow,
    Green,
}

impl LetterFeedback {
    /// Parse the `0`/`1`/`2` digit encoding
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Self::Grey),
            '1' => Some(Self::Yellow),
            '2' => Some(Self::Green),
            _ => None,
        }
    }

    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Grey => '0',
            Self::Yellow => '1',
            Self::Green => '2',
        }
    }
}

/// One letter of a guess together with its feedback and position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredLetter {
    pub letter: u8,
    pub feedback: LetterFeedback,
    pub position: usize,
}

/// Score `guess` against `answer` using Wordle's duplicate-letter rules
///
/// # Algorithm
/// 1. First pass: mark exact matches Green and consume those answer slots
/// 2. Second pass, left to right: a remaining guess letter takes the first
///    unconsumed occurrence in the answer (Yellow), otherwise it is Grey
///
/// A letter guessed twice but present once in the answer therefore gets at
/// most one non-grey mark, on the leftmost qualifying position.
///
/// # Examples
/// ```
/// use wordle_reducer::core::{LetterFeedback, Word, score};
///
/// let guess = Word::new("speed").unwrap();
/// let answer = Word::new("pleas").unwrap();
/// let scored = score(&guess, &answer);
///
/// assert_eq!(scored[2].feedback, LetterFeedback::Green);
/// assert_eq!(scored[3].feedback, LetterFeedback::Grey);
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> [ScoredLetter; WORD_LENGTH] {
    let guess_chars = guess.chars();
    let answer_chars = answer.chars();
    let mut consumed = [false; WORD_LENGTH];
    let mut feedback = [LetterFeedback::Grey; WORD_LENGTH];

    // Allow: Index needed to access guess[i], answer[i], and set feedback[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess_chars[i] == answer_chars[i] {
            feedback[i] = LetterFeedback::Green;
            consumed[i] = true;
        }
    }

    for i in 0..WORD_LENGTH {
        if feedback[i] == LetterFeedback::Green {
            continue;
        }
        let slot = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer_chars[j] == guess_chars[i]);
        if let Some(j) = slot {
            feedback[i] = LetterFeedback::Yellow;
            consumed[j] = true;
        }
    }

    std::array::from_fn(|i| ScoredLetter {
        letter: guess_chars[i],
        feedback: feedback[i],
        position: i,
    })
}

/// A guessed word together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    word: Word,
    scored: [ScoredLetter; WORD_LENGTH],
}

impl Guess {
    /// Attach externally observed feedback to a word
    #[must_use]
    pub fn new(word: Word, feedback: [LetterFeedback; WORD_LENGTH]) -> Self {
        let scored = std::array::from_fn(|i| ScoredLetter {
            letter: word.char_at(i),
            feedback: feedback[i],
            position: i,
        });
        Self { word, scored }
    }

    /// Score `word` against a known answer
    #[must_use]
    pub fn scored_against(word: Word, answer: &Word) -> Self {
        let scored = score(&word, answer);
        Self { word, scored }
    }

    /// A guess where every letter is Green
    #[must_use]
    pub fn solved(word: Word) -> Self {
        Self::new(word, [LetterFeedback::Green; WORD_LENGTH])
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn scored(&self) -> &[ScoredLetter; WORD_LENGTH] {
        &self.scored
    }

    /// True if every letter is Green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.scored
            .iter()
            .all(|s| s.feedback == LetterFeedback::Green)
    }

    /// Number of letters with the given feedback
    #[must_use]
    pub fn count(&self, feedback: LetterFeedback) -> usize {
        self.scored.iter().filter(|s| s.feedback == feedback).count()
    }

    /// Letter-digit pairs, e.g. `c0r0a2n0e2`
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(WORD_LENGTH * 2);
        for s in &self.scored {
            out.push(s.letter as char);
            out.push(s.feedback.digit());
        }
        out
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
