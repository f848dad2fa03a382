//! Clue solving command
//!
//! Runs one solve and packages the outcome for display.

use crate::solver::{LengthEstimator, ScoredResult, SolveError, Solver};

/// Outcome of solving one clue
pub struct SolveReport {
    pub clue: String,
    pub pattern: String,
    pub results: Vec<ScoredResult>,
}

/// Solve a clue and collect the ranked results
///
/// An empty result list is a valid outcome ("no matches"), not an error.
///
/// # Errors
///
/// Returns `SolveError` for an empty clue or a malformed pattern.
pub fn solve_clue<E: LengthEstimator>(
    solver: &Solver<E>,
    clue: &str,
    pattern: &str,
) -> Result<SolveReport, SolveError> {
    let results = solver.solve(clue, pattern)?;

    Ok(SolveReport {
        clue: clue.trim().to_string(),
        pattern: pattern.trim().to_uppercase(),
        results,
    })
}
