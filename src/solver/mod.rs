//! Clue solving pipeline
//!
//! Length estimation, semantic scoring, and the facade that ties them to
//! the dictionary scan and the feedback store.

mod engine;
pub mod length;
pub mod scorer;

pub use engine::{MAX_RESULTS, ScoredResult, Solver, USER_PROVIDED_DEFINITION};
pub use length::{FixedLengthEstimator, LengthEstimator, TokenCountEstimator};
pub use scorer::{SenseScore, score_word};

use crate::core::{ClueError, PatternError, WordError};
use crate::feedback::FeedbackError;

/// Facade-level error type
///
/// Every variant is recoverable at the boundary: the caller gets the
/// offending input back in the message and decides how to present it.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    Clue(#[from] ClueError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}
