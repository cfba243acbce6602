//! Wordle Reducer
//!
//! A Wordle solver that keeps the set of words still consistent with every
//! turn's feedback and suggests the guess expected to shrink it the most.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_reducer::core::{Criteria, Word, score};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let criteria = Criteria::new().update(&score(&guess, &answer));
//! assert!(criteria.matches(&answer));
//! assert!(!criteria.matches(&guess));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Game settings
pub mod config;

pub mod error;

// Feedback text parsing
pub mod input;

pub mod progress;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
