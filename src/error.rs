//! Error types for the solver

use crate::core::WordError;
use thiserror::Error;

/// Errors reported by the solver and its collaborators
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Feedback text that could not be parsed; nothing was folded
    #[error("invalid feedback {input:?}: {reason}")]
    InvalidFeedback { input: String, reason: String },

    /// The search was cancelled before every guess was scored
    #[error("search cancelled")]
    Cancelled,

    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SolverError {
    pub(crate) fn feedback(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFeedback {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
