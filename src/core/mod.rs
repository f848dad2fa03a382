//! Core domain types for clue solving
//!
//! This module contains the fundamental domain types with no I/O. All types
//! here are pure, testable, and validated on construction.

mod clue;
mod pattern;
mod word;

pub use clue::{Clue, ClueError, tokenize};
pub use pattern::{Pattern, PatternError, WILDCARD};
pub use word::{Word, WordError};
