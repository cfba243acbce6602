//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_autoplay_result, print_best_starts, print_scored, print_words_containing};
