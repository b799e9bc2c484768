//! Word Finder
//!
//! A dictionary-backed word engine: unscramble letter tiles into ranked words,
//! match crossword patterns, and find exact anagrams.
//!
//! # Quick Start
//!
//! ```rust
//! use wordfinder::corpus::Corpus;
//! use wordfinder::solver::{match_pattern, solve};
//!
//! let corpus = Corpus::from_words(["cat", "act", "cot", "at"]);
//!
//! // Words buildable from a bag of tiles, best first
//! let found = solve(&corpus, "tac");
//! assert_eq!(found[0].word, "act");
//!
//! // Crossword-style pattern, '?' matches any letter
//! assert_eq!(match_pattern(&corpus, "c?t"), vec!["cat", "cot"]);
//! ```

// Core domain types
pub mod core;

// Runtime configuration
pub mod config;

// Dictionary loading and indexing
pub mod corpus;

// Query algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
