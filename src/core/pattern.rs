//! Letter-pattern compilation and matching
//!
//! A pattern is a fixed-length template over the alphabet A-Z plus `?`,
//! where `?` accepts any single letter. `C?T` matches CAT, COT and CUT but
//! not COAT. An empty or all-wildcard pattern carries no shape information
//! and is reported as unconstrained.

use super::Word;
use std::fmt;

/// The wildcard marker accepted in pattern input
pub const WILDCARD: char = '?';

/// A single compiled pattern cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Cell {
    /// Accepts any letter A-Z
    Any,
    /// Must equal this uppercase letter exactly
    Literal(u8),
}

/// A compiled letter pattern
///
/// Construction validates every character, so a `Pattern` value is always
/// well formed: each cell is either a wildcard or an uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

/// Error type for malformed patterns
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern contains invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl Pattern {
    /// Compile a pattern from its text form
    ///
    /// Letters are accepted case-insensitively and normalized to uppercase;
    /// `?` compiles to a wildcard cell. An empty input compiles to an empty
    /// (unconstrained) pattern.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidCharacter` for any character outside
    /// `[A-Za-z?]`, reporting the character and its position.
    ///
    /// # Examples
    /// ```
    /// use clue_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("c?t").unwrap();
    /// assert_eq!(pattern.to_string(), "C?T");
    ///
    /// assert!(Pattern::parse("C-T").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let cells = text
            .trim()
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                WILDCARD => Ok(Cell::Any),
                c if c.is_ascii_alphabetic() => Ok(Cell::Literal(c.to_ascii_uppercase() as u8)),
                c => Err(PatternError::InvalidCharacter {
                    character: c,
                    position,
                }),
            })
            .collect::<Result<Vec<Cell>, PatternError>>()?;

        Ok(Self { cells })
    }

    /// Build an all-wildcard pattern of the given length
    ///
    /// Used when no usable pattern was supplied and a length has been
    /// estimated from the clue instead.
    #[must_use]
    pub fn wildcards(len: usize) -> Self {
        Self {
            cells: vec![Cell::Any; len],
        }
    }

    /// Number of cells in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when the pattern carries no shape information
    ///
    /// An empty pattern or one composed entirely of wildcards does not pin
    /// down a word length, so the caller must estimate one.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.cells.iter().all(|cell| *cell == Cell::Any)
    }

    /// Check whether a word satisfies this pattern
    ///
    /// A word matches iff its length equals the pattern length and every
    /// literal cell equals the letter at the same position.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.cells.len() {
            return false;
        }

        self.cells
            .iter()
            .zip(word.as_bytes())
            .all(|(cell, &letter)| match cell {
                Cell::Any => true,
                Cell::Literal(expected) => *expected == letter,
            })
    }
}

impl fmt::Display for Pattern {
    /// Canonical text form: uppercase letters and `?` markers
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Cell::Any => f.write_str("?")?,
                Cell::Literal(letter) => write!(f, "{}", *letter as char)?,
            }
        }
        Ok(())
    }
}
