//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! starter list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line; empty lines and entries that fail validation are
/// skipped. File order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use clue_solver::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use clue_solver::dictionary::loader::words_from_slice;
/// use clue_solver::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["ARES", "CAT", "CRANE"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "ARES");
        assert_eq!(words[1].text(), "CAT");
        assert_eq!(words[2].text(), "CRANE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["ARES", "C4T", "", "CRANE"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ARES");
        assert_eq!(words[1].text(), "CRANE");
    }

    #[test]
    fn words_from_slice_normalizes_case() {
        let words = words_from_slice(&["ares"]);
        assert_eq!(words[0].text(), "ARES");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_skips_blank_lines() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "CAT\n\n  \nDOG\ncr4ne\nARES").unwrap();

        let words = load_from_file(&path).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CAT", "DOG", "ARES"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("no/such/file.txt");
        assert!(result.is_err());
    }
}
