//! Word lists for Wordle solving
//!
//! A `Vocabulary` holds the two lists a game needs: the answer list that
//! seeds the candidate pool, and the shorter curated list of start words.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Answer and start-word lists, each ordered and free of duplicates
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    answers: Vec<Word>,
    start_words: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping repeated words but keeping first-seen order
    #[must_use]
    pub fn new(answers: Vec<Word>, start_words: Vec<Word>) -> Self {
        Self {
            answers: dedup(answers),
            start_words: dedup(start_words),
        }
    }

    /// Build a vocabulary from string slices, skipping invalid words
    #[must_use]
    pub fn from_slices(answers: &[&str], start_words: &[&str]) -> Self {
        Self::new(
            loader::words_from_slice(answers),
            loader::words_from_slice(start_words),
        )
    }

    /// Load both lists from files
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either file cannot be read.
    pub fn load(answers: impl AsRef<Path>, start_words: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(
            loader::load_from_file(answers)?,
            loader::load_from_file(start_words)?,
        ))
    }

    /// Every word that can be the answer
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Curated opening guesses
    #[must_use]
    pub fn start_words(&self) -> &[Word] {
        &self.start_words
    }

    /// True if `word` is in the answer list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.answers.contains(word)
    }

    /// Answer words that contain `letter`
    #[must_use]
    pub fn words_containing(&self, letter: u8) -> Vec<&Word> {
        let letter = letter.to_ascii_lowercase();
        self.answers
            .iter()
            .filter(|w| w.has_letter(letter))
            .collect()
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
