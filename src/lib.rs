//! Clue Solver
//!
//! A crossword clue solver that combines letter-pattern matching with
//! semantic ranking against a lexical knowledge base, and remembers
//! user-confirmed answers so repeat queries are instant.
//!
//! # Quick Start
//!
//! ```rust
//! use clue_solver::dictionary::Dictionary;
//! use clue_solver::feedback::FeedbackStore;
//! use clue_solver::lexicon::MemoryLexicon;
//! use clue_solver::solver::{Solver, TokenCountEstimator};
//!
//! let dictionary = Dictionary::embedded();
//! let lexicon = MemoryLexicon::embedded();
//! let solver = Solver::new(
//!     &dictionary,
//!     &lexicon,
//!     FeedbackStore::in_memory(),
//!     TokenCountEstimator,
//! );
//!
//! let results = solver.solve("Greek god of war", "A?ES").unwrap();
//! assert_eq!(results[0].word.text(), "ARES");
//! ```

// Core domain types
pub mod core;

// The word list and its pattern scan
pub mod dictionary;

// Confirmed-answer overrides
pub mod feedback;

// Lexical knowledge base capability
pub mod lexicon;

// Solving pipeline
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
