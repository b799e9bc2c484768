//! Core domain types for word solving
//!
//! Letter multisets, crossword patterns and the tile point table. Everything
//! here is pure and independent of how the dictionary is loaded.

mod letters;
mod pattern;
mod scoring;

pub use letters::{ALPHABET_LEN, LetterBag, LetterCounts, WILDCARD, signature};
pub use pattern::{Pattern, PatternError};
pub use scoring::{score_of, word_score};
