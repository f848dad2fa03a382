//! Persistent clue/pattern → confirmed-word overrides
//!
//! Once the user confirms an answer for a (clue, pattern) pair, later solves
//! of the same pair return it immediately with full confidence. The store is
//! keyed by an explicit two-field key — clue text verbatim as submitted,
//! pattern in its canonical uppercase text form — and compared for exact
//! equality only; there is no fuzzy matching on clue text.
//!
//! On disk the store is a JSON array of `{clue, pattern, word}` records.
//! Persistence is atomic: the new contents are written to a temporary file
//! in the same directory and renamed over the old one, so a crash mid-write
//! never corrupts the store.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Exact-equality lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackKey {
    pub clue: String,
    pub pattern: String,
}

/// On-disk record shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeedbackRecord {
    clue: String,
    pattern: String,
    word: String,
}

/// Error type for feedback operations
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("\"{word}\" does not satisfy the pattern \"{pattern}\"")]
    PatternMismatch { word: String, pattern: String },
    #[error("feedback store at {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
    #[error("failed to serialize feedback store: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write feedback store: {0}")]
    Io(#[from] io::Error),
}

/// Persistent mapping from (clue, pattern) to a confirmed word
///
/// Every successful [`record`](FeedbackStore::record) flushes to the backing
/// file when one is configured; an in-memory store never touches disk.
#[derive(Debug, Default)]
pub struct FeedbackStore {
    entries: FxHashMap<FeedbackKey, Word>,
    path: Option<PathBuf>,
}

impl FeedbackStore {
    /// Create an empty store with no backing file
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create an empty store backed by `path`
    ///
    /// Nothing is written until the first `record`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: FxHashMap::default(),
            path: Some(path.into()),
        }
    }

    /// Load a store from its backing file
    ///
    /// A missing file is not an error — it yields an empty store bound to
    /// the same path.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError::Corrupt` if the file exists but cannot be
    /// parsed (callers typically report this and continue with
    /// [`with_path`](FeedbackStore::with_path)), or `FeedbackError::Io` for
    /// any other read failure.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, FeedbackError> {
        let path = path.into();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::with_path(path));
            }
            Err(e) => return Err(FeedbackError::Io(e)),
        };

        let records: Vec<FeedbackRecord> =
            serde_json::from_str(&content).map_err(|e| FeedbackError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let mut entries = FxHashMap::default();
        for record in records {
            let word = Word::new(&record.word).map_err(|e| FeedbackError::Corrupt {
                path: path.clone(),
                reason: format!("record for clue \"{}\": {e}", record.clue),
            })?;
            // Later records win, same as repeated confirmations
            entries.insert(
                FeedbackKey {
                    clue: record.clue,
                    pattern: record.pattern,
                },
                word,
            );
        }

        Ok(Self {
            entries,
            path: Some(path),
        })
    }

    /// Look up a confirmed word for an exact (clue, pattern) key
    #[must_use]
    pub fn lookup(&self, clue: &str, pattern: &Pattern) -> Option<&Word> {
        let key = FeedbackKey {
            clue: clue.to_string(),
            pattern: pattern.to_string(),
        };
        self.entries.get(&key)
    }

    /// Record a confirmed word, overwriting any prior entry for the key
    ///
    /// The word must satisfy the pattern it is being confirmed for. An
    /// empty pattern means no shape constraint was supplied, so any word is
    /// accepted under the empty-pattern key. The store is flushed to disk
    /// before returning when a backing file is configured.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError::PatternMismatch` (leaving the store
    /// unchanged) if the word does not match the pattern, or a
    /// serialization/I/O error if the flush fails.
    pub fn record(
        &mut self,
        clue: &str,
        pattern: &Pattern,
        word: &Word,
    ) -> Result<(), FeedbackError> {
        if !pattern.is_empty() && !pattern.matches(word) {
            return Err(FeedbackError::PatternMismatch {
                word: word.text().to_string(),
                pattern: pattern.to_string(),
            });
        }

        self.entries.insert(
            FeedbackKey {
                clue: clue.to_string(),
                pattern: pattern.to_string(),
            },
            word.clone(),
        );

        self.persist()
    }

    /// Write the store to its backing file atomically
    ///
    /// No-op for an in-memory store. Records are written in sorted key
    /// order so the file form is deterministic and round-trips exactly.
    ///
    /// # Errors
    ///
    /// Returns a serialization or I/O error if the file cannot be replaced.
    pub fn persist(&self) -> Result<(), FeedbackError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut records: Vec<FeedbackRecord> = self
            .entries
            .iter()
            .map(|(key, word)| FeedbackRecord {
                clue: key.clue.clone(),
                pattern: key.pattern.clone(),
                word: word.text().to_string(),
            })
            .collect();
        records.sort_by(|a, b| (&a.clue, &a.pattern).cmp(&(&b.clue, &b.pattern)));

        let json = serde_json::to_string_pretty(&records)?;

        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        let parent = parent.unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path).map_err(|e| FeedbackError::Io(e.error))?;

        Ok(())
    }

    /// Number of stored overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no overrides are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
