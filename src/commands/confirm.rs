//! Answer confirmation command
//!
//! Records a user-confirmed answer so the next solve of the same
//! (clue, pattern) pair returns it immediately.

use crate::solver::{LengthEstimator, SolveError, Solver};

/// Record a confirmed answer
///
/// # Errors
///
/// Returns `SolveError` for invalid inputs, and propagates the feedback
/// store's pattern-mismatch error unchanged when the word does not fit the
/// pattern.
pub fn confirm_answer<E: LengthEstimator>(
    solver: &mut Solver<E>,
    clue: &str,
    pattern: &str,
    word: &str,
) -> Result<(), SolveError> {
    solver.confirm(clue, pattern, word)
}
