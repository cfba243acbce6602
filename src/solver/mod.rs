//! Wordle solving algorithms
//!
//! Strategies that rank the next guess, the selector they share, and the
//! `GameState` that drives a game with them.

pub mod frequency;
mod game;
pub mod reduction;
mod selector;
pub mod strategy;

pub use frequency::LetterFrequencyStrategy;
pub use game::{AutoplayResult, GameState, GameStatus};
pub use reduction::{CancelToken, ReductionSearch, SearchOptions};
pub use selector::{Objective, select_best};
pub use strategy::{Ranking, SearchContext, Strategy, StrategyType};
