//! The crossword dictionary and its pattern scan
//!
//! A `Dictionary` is loaded once at startup and treated as read-only: the
//! solve path only ever scans it. `find_matches` is the matcher half of the
//! pipeline — it returns every word of the right length and shape, in load
//! order, with no cap and no side effects.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Pattern, Word};
use std::io;
use std::path::Path;

/// An immutable, load-ordered word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// Order is preserved; duplicates are harmless (membership is
    /// idempotent).
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build a dictionary from raw strings, skipping invalid entries
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(loader::words_from_slice(slice))
    }

    /// Load a dictionary from a newline-delimited word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_words(loader::load_from_file(path)?))
    }

    /// The starter dictionary embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(WORDS)
    }

    /// All words matching the pattern, in dictionary order
    ///
    /// Returns the full match set; the caller decides how many to keep.
    #[must_use]
    pub fn find_matches(&self, pattern: &Pattern) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| pattern.matches(word))
            .collect()
    }

    /// Iterate over all words in load order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["ARES", "APES", "ACES", "CAT", "COT", "CUT", "CRANE"])
    }

    #[test]
    fn find_matches_filters_by_length_and_literals() {
        let dict = dictionary();
        let pattern = Pattern::parse("A?ES").unwrap();

        let matches = dict.find_matches(&pattern);
        let texts: Vec<&str> = matches.iter().map(|w| w.text()).collect();

        assert_eq!(texts, vec!["ARES", "APES", "ACES"]);
    }

    #[test]
    fn find_matches_preserves_dictionary_order() {
        let dict = Dictionary::from_slice(&["CUT", "CAT", "COT"]);
        let pattern = Pattern::parse("C?T").unwrap();

        let texts: Vec<&str> = dict
            .find_matches(&pattern)
            .iter()
            .map(|w| w.text())
            .collect();

        assert_eq!(texts, vec!["CUT", "CAT", "COT"]);
    }

    #[test]
    fn find_matches_returns_full_set() {
        let dict = dictionary();
        let pattern = Pattern::parse("???").unwrap();

        assert_eq!(dict.find_matches(&pattern).len(), 3);
    }

    #[test]
    fn find_matches_empty_when_nothing_fits() {
        let dict = dictionary();
        let pattern = Pattern::parse("ZZZZ").unwrap();

        assert!(dict.find_matches(&pattern).is_empty());
    }

    #[test]
    fn embedded_word_list_is_usable() {
        let dict = Dictionary::embedded();

        assert_eq!(dict.len(), WORDS_COUNT);
        assert!(dict.iter().any(|w| w.text() == "ARES"));
        assert!(dict.iter().any(|w| w.text() == "CAT"));
    }

    #[test]
    fn embedded_words_are_valid() {
        // Every embedded entry must survive validation
        assert_eq!(loader::words_from_slice(WORDS).len(), WORDS.len());
    }
}
