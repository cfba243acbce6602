//! Accumulated constraint state
//!
//! `Criteria` records everything learned from feedback so far: letters fixed
//! at a position, letters ruled out at a position, letters ruled out
//! everywhere, and letters that must appear somewhere. It is a plain value:
//! folding feedback in returns a new `Criteria` and leaves the original alone.

use super::{LetterFeedback, LetterSet, ScoredLetter, WORD_LENGTH, Word};
use std::fmt;

/// Constraint on a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The position is known to hold this letter
    Fixed(u8),
    /// The position holds none of these letters (positional exclusions only)
    Open(LetterSet),
}

impl Default for Slot {
    fn default() -> Self {
        Self::Open(LetterSet::EMPTY)
    }
}

/// Everything known about the answer after some number of turns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    slots: [Slot; WORD_LENGTH],
    /// Per-position exclusions merged with `global_excluded`; rebuilt after every fold
    effective: [LetterSet; WORD_LENGTH],
    global_excluded: LetterSet,
    must_contain: LetterSet,
}

impl Criteria {
    /// Criteria that every word satisfies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into a copy of these criteria
    ///
    /// - Green fixes the position and requires the letter
    /// - Yellow requires the letter and excludes it from that position
    /// - Grey excludes the letter everywhere, unless the same guess marked the
    ///   letter Green or Yellow elsewhere; then it adds nothing
    ///
    /// A letter that is required never stays globally excluded.
    ///
    /// # Examples
    /// ```
    /// use wordle_reducer::core::{Criteria, Word, score};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("pleas").unwrap();
    /// let criteria = Criteria::new().update(&score(&guess, &answer));
    ///
    /// // One E is green, so the grey E must not ban E globally
    /// assert!(!criteria.global_excluded().contains(b'e'));
    /// assert!(criteria.matches(&answer));
    /// ```
    #[must_use]
    pub fn update(&self, scored: &[ScoredLetter; WORD_LENGTH]) -> Self {
        let mut next = self.clone();

        for s in scored {
            match s.feedback {
                LetterFeedback::Green => {
                    next.slots[s.position] = Slot::Fixed(s.letter);
                    next.must_contain.insert(s.letter);
                }
                LetterFeedback::Yellow => {
                    next.must_contain.insert(s.letter);
                    next.exclude_at(s.position, s.letter);
                }
                LetterFeedback::Grey => next.global_excluded.insert(s.letter),
            }
        }

        // Covers a grey duplicate of a letter this guess marked present
        next.global_excluded = next.global_excluded.difference(next.must_contain);
        next.rebuild();
        next
    }

    fn exclude_at(&mut self, position: usize, letter: u8) {
        // A fixed position already rules out every other letter
        if let Slot::Open(excluded) = &mut self.slots[position] {
            excluded.insert(letter);
        }
    }

    fn rebuild(&mut self) {
        for (effective, slot) in self.effective.iter_mut().zip(&self.slots) {
            *effective = match slot {
                Slot::Fixed(_) => LetterSet::EMPTY,
                Slot::Open(own) => own.union(self.global_excluded),
            };
        }
    }

    /// Check whether `word` is consistent with every constraint
    ///
    /// Must-contain letters are checked for presence only; a letter seen
    /// twice in the answer is satisfied by a single occurrence.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        for (i, slot) in self.slots.iter().enumerate() {
            let letter = word.char_at(i);
            let allowed = match slot {
                Slot::Fixed(fixed) => letter == *fixed,
                Slot::Open(_) => !self.effective[i].contains(letter),
            };
            if !allowed {
                return false;
            }
        }

        !word.letters().intersects(self.global_excluded)
            && word.letters().is_superset(self.must_contain)
    }

    /// Keep only the words that satisfy these criteria
    pub fn filter<'w>(&self, words: impl IntoIterator<Item = &'w Word>) -> Vec<Word> {
        words
            .into_iter()
            .filter(|w| self.matches(w))
            .cloned()
            .collect()
    }

    /// Count the words that satisfy these criteria
    #[must_use]
    pub fn count_matches(&self, words: &[Word]) -> usize {
        words.iter().filter(|w| self.matches(w)).count()
    }

    #[must_use]
    pub const fn slot(&self, position: usize) -> Slot {
        self.slots[position]
    }

    /// The letter fixed at `position`, if any
    #[must_use]
    pub const fn fixed_letter(&self, position: usize) -> Option<u8> {
        match self.slots[position] {
            Slot::Fixed(letter) => Some(letter),
            Slot::Open(_) => None,
        }
    }

    /// Letters a word may not have at `position` (global and positional)
    #[must_use]
    pub const fn effective_exclusions(&self, position: usize) -> LetterSet {
        self.effective[position]
    }

    #[must_use]
    pub const fn global_excluded(&self) -> LetterSet {
        self.global_excluded
    }

    #[must_use]
    pub const fn must_contain(&self) -> LetterSet {
        self.must_contain
    }

    /// True if no feedback has been folded in
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Criteria {
    /// Regex-like summary, e.g. `[^cnr][^cnr]a[^cnr]e +ae -cnr`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Fixed(letter) => write!(f, "{}", *letter as char)?,
                Slot::Open(_) if self.effective[i].is_empty() => f.write_str(".")?,
                Slot::Open(_) => write!(f, "[^{}]", self.effective[i])?,
            }
        }
        if !self.must_contain.is_empty() {
            write!(f, " +{}", self.must_contain)?;
        }
        if !self.global_excluded.is_empty() {
            write!(f, " -{}", self.global_excluded)?;
        }
        Ok(())
    }
}
