//! Command implementations

pub mod analyze;
pub mod autoplay;
pub mod lookup;

pub use analyze::{AnalyzeOptions, AnalyzeSummary, DEFAULT_THRESHOLD, run_analyze};
pub use autoplay::{autoplay_word, best_start};
pub use lookup::{score_words, words_with_letter};
