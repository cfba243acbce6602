//! Game configuration
//!
//! Values chosen once when a `GameState` is built: which strategy ranks the
//! guesses, how many worker threads the reduction search may use, how long
//! autoplay may run, and the token that cancels a running search.

use crate::solver::CancelToken;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Which strategy ranks the next guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Minimise expected remaining candidates (one step lookahead, parallel)
    #[default]
    Reduction,
    /// Maximise pool-wide letter frequency (no lookahead)
    LetterFrequency,
}

impl StrategyKind {
    /// Supported names: "reduction", "count-reduction", "frequency", "letter-frequency"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "reduction" | "count-reduction" | "countreduction" => Some(Self::Reduction),
            "frequency" | "letter-frequency" | "letterfrequency" => Some(Self::LetterFrequency),
            _ => None,
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown strategy: {s}"))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reduction => f.write_str("reduction"),
            Self::LetterFrequency => f.write_str("letter-frequency"),
        }
    }
}

/// Settings for one game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub strategy: StrategyKind,
    /// Worker threads for the reduction search; `None` uses every core
    pub parallelism: Option<usize>,
    /// Autoplay gives up after this many guesses
    pub max_turns: usize,
    /// Cancelling it fails the game's running and future searches
    pub cancel: CancelToken,
}

impl GameConfig {
    #[must_use]
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            parallelism: None,
            max_turns: 20,
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

/// Number of hardware threads, or 1 if it cannot be determined
#[must_use]
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
