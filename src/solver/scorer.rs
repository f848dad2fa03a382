//! Semantic relevance scoring
//!
//! Scores a candidate word against a clue using the candidate's senses from
//! the lexical knowledge base. Each sense contributes three token-overlap
//! measures with fixed weights; the candidate takes the score of its best
//! sense, and that sense's definition travels with the result.
//!
//! The whole module is pure: no mutation, no I/O, and the same inputs always
//! produce the same score.

use crate::core::{Clue, Word, tokenize};
use crate::lexicon::{LexicalDatabase, Sense};
use rustc_hash::FxHashSet;

/// Weight of clue overlap with a sense's definition tokens
pub const DEFINITION_WEIGHT: f64 = 0.5;

/// Weight of clue overlap with a sense's identifier tokens
pub const IDENTIFIER_WEIGHT: f64 = 0.7;

/// Weight of clue overlap with the union of a sense's hypernym tokens
pub const HYPERNYM_WEIGHT: f64 = 0.3;

const TOTAL_WEIGHT: f64 = DEFINITION_WEIGHT + IDENTIFIER_WEIGHT + HYPERNYM_WEIGHT;

/// Score and supporting definition for one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct SenseScore {
    /// Relevance in [0.0, 1.0]
    pub score: f64,
    /// Definition of the best-scoring sense, empty if the word has none
    pub definition: String,
}

/// Score a candidate word against a clue
///
/// Retrieves the candidate's senses from the knowledge base. A word with no
/// senses scores 0.0 with an empty definition — it can still be returned on
/// pattern match alone. Otherwise the score is the maximum per-sense
/// combined overlap; ties between senses keep the first-listed sense, so
/// the primary sense's definition wins.
#[must_use]
pub fn score_word(clue: &Clue, word: &Word, lexicon: &dyn LexicalDatabase) -> SenseScore {
    let senses = lexicon.senses_of(word.text());

    let mut best: Option<SenseScore> = None;
    for sense in &senses {
        let score = score_sense(clue, sense);
        let better = match &best {
            Some(current) => score > current.score,
            None => true,
        };
        if better {
            best = Some(SenseScore {
                score,
                definition: sense.definition.clone(),
            });
        }
    }

    best.unwrap_or(SenseScore {
        score: 0.0,
        definition: String::new(),
    })
}

/// Combined weighted overlap for one sense, clamped into [0.0, 1.0]
fn score_sense(clue: &Clue, sense: &Sense) -> f64 {
    let definition_tokens = tokenize(&sense.definition);
    let identifier_tokens = tokenize(&sense.identifier);

    let mut hypernym_tokens = FxHashSet::default();
    for hypernym in &sense.hypernyms {
        hypernym_tokens.extend(tokenize(hypernym));
    }

    let combined = DEFINITION_WEIGHT * overlap(clue.tokens(), &definition_tokens)
        + IDENTIFIER_WEIGHT * overlap(clue.tokens(), &identifier_tokens)
        + HYPERNYM_WEIGHT * overlap(clue.tokens(), &hypernym_tokens);

    (combined / TOTAL_WEIGHT).clamp(0.0, 1.0)
}

/// Fraction of the clue's distinct tokens found in `other`
///
/// The denominator is the clue token count, so each measure is bounded by
/// 1.0 regardless of how long the definition or identifier is.
fn overlap(clue_tokens: &FxHashSet<String>, other: &FxHashSet<String>) -> f64 {
    if clue_tokens.is_empty() {
        return 0.0;
    }

    let shared = clue_tokens.iter().filter(|token| other.contains(*token)).count();
    shared as f64 / clue_tokens.len() as f64
}
