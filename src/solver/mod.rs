//! Word solving over a loaded corpus
//!
//! - `pattern` - crossword pattern matching (`c?t`)
//! - `unscramble` - letter-bag solving with blank tiles and scoring
//!
//! All queries are pure reads of the corpus. Before the corpus has loaded
//! they return empty results rather than failing.

pub mod pattern;
pub mod unscramble;

pub use pattern::{match_parsed, match_pattern};
pub use unscramble::{
    MIN_WORD_LEN, ScoredWord, exact_anagrams, group_by_length, rank, solve, solve_bag,
};
