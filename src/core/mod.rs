//! Core domain types for Wordle
//!
//! Words, feedback scoring and the accumulated constraint state. Nothing in
//! here touches I/O or threads; every type is a plain value.

mod criteria;
pub mod feedback;
mod letters;
mod word;

pub use criteria::{Criteria, Slot};
pub use feedback::{Guess, LetterFeedback, ScoredLetter, score};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
