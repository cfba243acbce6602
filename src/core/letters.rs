//! Compact sets of lowercase ASCII letters
//!
//! Every exclusion and presence constraint is a `LetterSet`: one bit per letter
//! `a..=z`, so unions and membership tests are single integer operations.

use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Build a set from a slice of lowercase letters
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        letters.iter().fold(Self::EMPTY, |set, &l| set.with(l))
    }

    /// Return a copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'a');
        set.insert(b'z');
        set.insert(b'a');

        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn set_operations() {
        let left = LetterSet::from_letters(b"abc");
        let right = LetterSet::from_letters(b"cde");

        assert_eq!(left.union(right), LetterSet::from_letters(b"abcde"));
        assert_eq!(left.difference(right), LetterSet::from_letters(b"ab"));
        assert!(left.intersects(right));
        assert!(!left.intersects(LetterSet::from_letters(b"xyz")));
        assert!(left.is_superset(LetterSet::from_letters(b"ca")));
        assert!(!left.is_superset(right));
    }

    #[test]
    fn display_is_alphabetical() {
        let set = LetterSet::from_letters(b"tsre");
        assert_eq!(set.to_string(), "erst");
        assert_eq!(set.iter().collect::<Vec<_>>(), b"erst".to_vec());
    }
}
