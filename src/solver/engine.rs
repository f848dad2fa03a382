//! Main clue-solving interface
//!
//! The `Solver` orchestrates the pipeline: input validation, the feedback
//! short-circuit, length estimation for unconstrained patterns, the
//! dictionary scan, and semantic ranking.

use super::length::LengthEstimator;
use super::scorer::score_word;
use crate::core::{Clue, Pattern, Word};
use crate::dictionary::Dictionary;
use crate::feedback::FeedbackStore;
use crate::lexicon::LexicalDatabase;
use rayon::prelude::*;

/// How many ranked results a solve returns at most
pub const MAX_RESULTS: usize = 3;

/// Definition reported for a confirmed answer the knowledge base does not
/// know
pub const USER_PROVIDED_DEFINITION: &str = "User-provided";

/// One ranked answer candidate
///
/// `score` is 1.0 exactly when the word comes from a feedback confirmation;
/// semantically ranked candidates carry their clamped overlap score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub word: Word,
    pub score: f64,
    pub definition: String,
}

/// Main clue solver
///
/// Borrows the shared read-only dictionary and knowledge base, and owns the
/// mutable feedback store. Generic over the length-estimation policy.
pub struct Solver<'a, E: LengthEstimator> {
    dictionary: &'a Dictionary,
    lexicon: &'a dyn LexicalDatabase,
    feedback: FeedbackStore,
    estimator: E,
}

impl<'a, E: LengthEstimator> Solver<'a, E> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `dictionary`: the loaded word list, scanned read-only
    /// - `lexicon`: sense lookup capability for scoring
    /// - `feedback`: confirmed-answer overrides, consulted before any
    ///   computation
    /// - `estimator`: length policy for unconstrained patterns
    pub fn new(
        dictionary: &'a Dictionary,
        lexicon: &'a dyn LexicalDatabase,
        feedback: FeedbackStore,
        estimator: E,
    ) -> Self {
        Self {
            dictionary,
            lexicon,
            feedback,
            estimator,
        }
    }

    /// Solve a clue against an optional letter pattern
    ///
    /// A feedback-confirmed answer for this exact (clue, pattern) pair is
    /// returned alone with score 1.0, skipping matching and scoring
    /// entirely. Otherwise candidates of the right shape are ranked by
    /// semantic relevance; equal scores order by ascending lexical word
    /// order. An empty result list means no dictionary word fit — that is a
    /// valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::Clue` for an empty clue and
    /// `SolveError::Pattern` for a pattern with characters outside
    /// `[A-Za-z?]`.
    pub fn solve(
        &self,
        clue_text: &str,
        pattern_text: &str,
    ) -> Result<Vec<ScoredResult>, super::SolveError> {
        let clue = Clue::new(clue_text)?;
        let pattern = Pattern::parse(pattern_text)?;

        if let Some(word) = self.feedback.lookup(clue.text(), &pattern) {
            return Ok(vec![self.confirmed_result(word)]);
        }

        let pattern = if pattern.is_unconstrained() {
            Pattern::wildcards(self.estimator.estimate(&clue))
        } else {
            pattern
        };

        let candidates = self.dictionary.find_matches(&pattern);
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut results: Vec<ScoredResult> = candidates
            .par_iter()
            .map(|&word| {
                let scored = score_word(&clue, word, self.lexicon);
                ScoredResult {
                    word: word.clone(),
                    score: scored.score,
                    definition: scored.definition,
                }
            })
            .collect();

        // Descending score, then ascending lexical order for determinism
        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.word.cmp(&b.word))
        });
        results.truncate(MAX_RESULTS);

        Ok(results)
    }

    /// Record a confirmed answer for a (clue, pattern) pair
    ///
    /// # Errors
    ///
    /// Returns validation errors for the clue, pattern or word, and
    /// propagates `FeedbackError::PatternMismatch` unchanged when the word
    /// does not satisfy the pattern.
    pub fn confirm(
        &mut self,
        clue_text: &str,
        pattern_text: &str,
        word_text: &str,
    ) -> Result<(), super::SolveError> {
        let clue = Clue::new(clue_text)?;
        let pattern = Pattern::parse(pattern_text)?;
        let word = Word::new(word_text)?;

        self.feedback.record(clue.text(), &pattern, &word)?;
        Ok(())
    }

    /// The confirmed-answer store
    #[must_use]
    pub fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }

    fn confirmed_result(&self, word: &Word) -> ScoredResult {
        let definition = self
            .lexicon
            .senses_of(word.text())
            .into_iter()
            .next()
            .map_or_else(|| USER_PROVIDED_DEFINITION.to_string(), |s| s.definition);

        ScoredResult {
            word: word.clone(),
            score: 1.0,
            definition,
        }
    }
}
