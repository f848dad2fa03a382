//! Lexical knowledge base
//!
//! The scorer consumes word senses through the [`LexicalDatabase`] trait, so
//! any backend exposing definitions, sense identifiers and hypernym
//! identifiers can be plugged in — an embedded dataset, a precomputed index,
//! or a remote dictionary service. [`MemoryLexicon`] is the shipped
//! implementation: a JSON-backed in-memory map with a starter dataset
//! compiled into the binary.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One meaning of a word
///
/// `identifier` is a short sense label in the WordNet style (`ares.n.01`);
/// `hypernyms` are the identifiers of more general senses (`feline.n.01`
/// for a cat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    pub identifier: String,
    #[serde(default)]
    pub hypernyms: Vec<String>,
}

/// Capability trait for sense lookup
///
/// Implementations must be `Sync`: the knowledge base is loaded once and
/// shared immutably across the scoring pass.
pub trait LexicalDatabase: Sync {
    /// All senses of a word, or an empty vector for unknown words
    ///
    /// Lookup is case-insensitive.
    fn senses_of(&self, word: &str) -> Vec<Sense>;
}

/// Error type for lexicon loading
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("lexicon file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory word → senses map
///
/// The on-disk schema is a JSON object keyed by lowercase word, each value
/// an array of senses:
///
/// ```json
/// { "ares": [ { "definition": "...", "identifier": "ares.n.01",
///               "hypernyms": ["greek_deity.n.01"] } ] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    senses: FxHashMap<String, Vec<Sense>>,
}

impl MemoryLexicon {
    /// Create an empty lexicon
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sense for a word
    ///
    /// Senses accumulate in insertion order; the first inserted sense is the
    /// word's primary sense.
    pub fn insert(&mut self, word: &str, sense: Sense) {
        self.senses.entry(word.to_lowercase()).or_default().push(sense);
    }

    /// Parse a lexicon from its JSON text form
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::Parse` if the input is not the expected JSON
    /// schema.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let raw: FxHashMap<String, Vec<Sense>> = serde_json::from_str(json)?;

        let senses = raw
            .into_iter()
            .map(|(word, senses)| (word.to_lowercase(), senses))
            .collect();

        Ok(Self { senses })
    }

    /// Load a lexicon from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::Io` if the file cannot be read and
    /// `LexiconError::Parse` if it is not the expected schema.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The starter lexicon embedded at build time
    ///
    /// # Panics
    ///
    /// Will not panic — the embedded dataset is validated by the test suite.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_json_str(include_str!("../../data/lexicon.json"))
            .expect("embedded lexicon is valid JSON")
    }

    /// Number of words with at least one sense
    #[must_use]
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    /// True when no words are known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

impl LexicalDatabase for MemoryLexicon {
    fn senses_of(&self, word: &str) -> Vec<Sense> {
        self.senses
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn war_god_sense() -> Sense {
        Sense {
            definition: "the Greek god of war".to_string(),
            identifier: "ares.n.01".to_string(),
            hypernyms: vec!["greek_deity.n.01".to_string()],
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut lexicon = MemoryLexicon::new();
        lexicon.insert("ARES", war_god_sense());

        let senses = lexicon.senses_of("ares");
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].identifier, "ares.n.01");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut lexicon = MemoryLexicon::new();
        lexicon.insert("ares", war_god_sense());

        assert_eq!(lexicon.senses_of("ARES").len(), 1);
        assert_eq!(lexicon.senses_of("Ares").len(), 1);
    }

    #[test]
    fn unknown_word_has_no_senses() {
        let lexicon = MemoryLexicon::new();
        assert!(lexicon.senses_of("XYZZY").is_empty());
    }

    #[test]
    fn senses_accumulate_in_order() {
        let mut lexicon = MemoryLexicon::new();
        lexicon.insert("cat", war_god_sense());
        lexicon.insert(
            "cat",
            Sense {
                definition: "a whip".to_string(),
                identifier: "cat-o-nine-tails.n.01".to_string(),
                hypernyms: vec![],
            },
        );

        let senses = lexicon.senses_of("cat");
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[0].identifier, "ares.n.01");
    }

    #[test]
    fn from_json_str_parses_schema() {
        let json = r#"{
            "ares": [
                {
                    "definition": "the Greek god of war",
                    "identifier": "ares.n.01",
                    "hypernyms": ["greek_deity.n.01"]
                }
            ]
        }"#;

        let lexicon = MemoryLexicon::from_json_str(json).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.senses_of("ares")[0].definition, "the Greek god of war");
    }

    #[test]
    fn hypernyms_field_is_optional() {
        let json = r#"{"cat": [{"definition": "a pet", "identifier": "cat.n.01"}]}"#;

        let lexicon = MemoryLexicon::from_json_str(json).unwrap();
        assert!(lexicon.senses_of("cat")[0].hypernyms.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = MemoryLexicon::from_json_str("not json at all");
        assert!(matches!(result, Err(LexiconError::Parse(_))));
    }

    #[test]
    fn embedded_lexicon_parses() {
        let lexicon = MemoryLexicon::embedded();
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn embedded_lexicon_covers_fixtures() {
        let lexicon = MemoryLexicon::embedded();

        let ares = lexicon.senses_of("ares");
        assert!(!ares.is_empty());
        assert!(ares[0].definition.contains("war"));

        assert!(!lexicon.senses_of("cat").is_empty());
    }
}
