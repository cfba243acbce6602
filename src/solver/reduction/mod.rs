//! Expected-remaining-candidates search
//!
//! For every candidate guess, pretend each possible answer is the real one,
//! fold the feedback it would produce into the current criteria, and count
//! how many possible answers survive. The average survivor count is the
//! guess's score; lower is better.

mod calculator;
mod search;

pub use calculator::{expected_remaining, remaining_after};
pub use search::{CancelToken, ReductionSearch, SearchOptions, candidate_guesses, score_guesses};
