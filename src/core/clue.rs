//! Clue text and tokenization
//!
//! A Clue keeps the text exactly as submitted (it doubles as the feedback
//! lookup key) alongside a lowercase bag-of-words token set used for
//! overlap scoring.

use rustc_hash::FxHashSet;
use std::fmt;

/// A crossword clue
///
/// Holds the trimmed original text and its token set. Tokens are lowercase
/// runs of alphanumeric characters; punctuation is stripped.
#[derive(Debug, Clone)]
pub struct Clue {
    text: String,
    tokens: FxHashSet<String>,
    token_count: usize,
}

/// Error type for unusable clues
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("clue must not be empty")]
    Empty,
}

/// Split text into lowercase alphanumeric tokens
///
/// Punctuation and whitespace act as separators and are dropped, so
/// `"Greek god of war!"` yields `{greek, god, of, war}`. Identifier strings
/// such as `ares.n.01` tokenize the same way: `{ares, n, 01}`.
#[must_use]
pub fn tokenize(text: &str) -> FxHashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl Clue {
    /// Create a clue from free text
    ///
    /// # Errors
    /// Returns `ClueError::Empty` if the text is empty or only whitespace.
    ///
    /// # Examples
    /// ```
    /// use clue_solver::core::Clue;
    ///
    /// let clue = Clue::new("Greek god of war").unwrap();
    /// assert!(clue.tokens().contains("war"));
    /// assert!(Clue::new("   ").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, ClueError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(ClueError::Empty);
        }

        let token_count = trimmed
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .count();

        Ok(Self {
            text: trimmed.to_string(),
            tokens: tokenize(trimmed),
            token_count,
        })
    }

    /// The clue text as submitted (trimmed)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct lowercase tokens of the clue
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &FxHashSet<String> {
        &self.tokens
    }

    /// Number of tokens before deduplication
    ///
    /// The length estimator works from the raw token count, so repeated
    /// words still contribute.
    #[inline]
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.token_count
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_creation_valid() {
        let clue = Clue::new("Greek god of war").unwrap();
        assert_eq!(clue.text(), "Greek god of war");
        assert_eq!(clue.token_count(), 4);
    }

    #[test]
    fn clue_rejects_empty() {
        assert_eq!(Clue::new("").unwrap_err(), ClueError::Empty);
        assert_eq!(Clue::new("  \t ").unwrap_err(), ClueError::Empty);
    }

    #[test]
    fn clue_tokens_are_lowercase() {
        let clue = Clue::new("Greek GOD of War").unwrap();
        assert!(clue.tokens().contains("greek"));
        assert!(clue.tokens().contains("god"));
        assert!(clue.tokens().contains("war"));
        assert!(!clue.tokens().contains("War"));
    }

    #[test]
    fn clue_strips_punctuation() {
        let clue = Clue::new("Feline, friend!").unwrap();
        assert!(clue.tokens().contains("feline"));
        assert!(clue.tokens().contains("friend"));
        assert_eq!(clue.tokens().len(), 2);
    }

    #[test]
    fn clue_text_preserved_verbatim() {
        let clue = Clue::new("  Feline friend ").unwrap();
        assert_eq!(clue.text(), "Feline friend");
    }

    #[test]
    fn token_count_keeps_duplicates() {
        let clue = Clue::new("war of the war").unwrap();
        assert_eq!(clue.token_count(), 4);
        assert_eq!(clue.tokens().len(), 3);
    }

    #[test]
    fn tokenize_identifier_strings() {
        let tokens = tokenize("ares.n.01");
        assert!(tokens.contains("ares"));
        assert!(tokens.contains("n"));
        assert!(tokens.contains("01"));
    }

    #[test]
    fn tokenize_underscored_identifiers() {
        let tokens = tokenize("greek_deity.n.01");
        assert!(tokens.contains("greek"));
        assert!(tokens.contains("deity"));
    }
}
