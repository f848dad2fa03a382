//! Word-length estimation strategies
//!
//! When the user supplies no usable pattern (empty or all wildcards), the
//! matcher still needs a shape constraint. A `LengthEstimator` derives a
//! target word length from the clue alone. The policy is behind a
//! one-method trait so it can be tuned or tested independently of the rest
//! of the pipeline.

use crate::core::Clue;

/// A strategy for guessing the target word length from a clue
///
/// Implementations must be pure and deterministic: the same clue always
/// yields the same estimate, and the estimate is at least 1.
pub trait LengthEstimator {
    /// Estimate a target word length for the clue
    fn estimate(&self, clue: &Clue) -> usize;
}

/// Shortest length the default estimator will return
pub const MIN_ESTIMATED_LENGTH: usize = 2;

/// Longest length the default estimator will return
pub const MAX_ESTIMATED_LENGTH: usize = 15;

/// Default policy: scaled token count
///
/// The estimate is `clamp(token_count * 3 / 2, 2, 15)` — one-and-a-half
/// letters of answer per clue word, clamped to the range of lengths found
/// in ordinary crossword grids. A two-word clue suggests a 3-letter answer;
/// clues of ten or more words saturate at 15.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCountEstimator;

impl LengthEstimator for TokenCountEstimator {
    fn estimate(&self, clue: &Clue) -> usize {
        (clue.token_count() * 3 / 2).clamp(MIN_ESTIMATED_LENGTH, MAX_ESTIMATED_LENGTH)
    }
}

/// Fixed-length policy
///
/// Always returns the configured length. Useful in tests and for callers
/// that know the grid slot size out of band.
#[derive(Debug, Clone, Copy)]
pub struct FixedLengthEstimator {
    length: usize,
}

impl FixedLengthEstimator {
    /// Create an estimator pinned to `length` (minimum 1)
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }
}

impl LengthEstimator for FixedLengthEstimator {
    fn estimate(&self, _clue: &Clue) -> usize {
        self.length
    }
}
