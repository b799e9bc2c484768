//! Command implementations
//!
//! Each command validates user input, runs a query against the corpus and
//! returns a result struct for the output layer. Unlike the solver functions,
//! commands report malformed input and an unloaded corpus as errors so the
//! user can be told what went wrong.

pub mod benchmark;
pub mod lookup;
pub mod pattern;
pub mod stats;
pub mod unscramble;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use lookup::{WordCheck, check_word, find_anagrams};
pub use pattern::{PatternResult, find_pattern};
pub use stats::{CorpusReport, corpus_report};
pub use unscramble::{UnscrambleConfig, UnscrambleResult, unscramble};

use crate::core::PatternError;
use crate::corpus::Corpus;
use thiserror::Error;

/// Why a command could not run its query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("word list {location} is not loaded")]
    CorpusUnavailable { location: String },
    #[error("no letters given, use a-z and '?' for blank tiles")]
    NoLetters,
    #[error("too many letters: {len} given, at most {max} allowed")]
    TooManyLetters { len: usize, max: usize },
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),
}

/// Fail fast when the corpus has not loaded
pub(crate) fn require_loaded(corpus: &Corpus) -> Result<(), QueryError> {
    if corpus.is_ready() {
        Ok(())
    } else {
        Err(QueryError::CorpusUnavailable {
            location: corpus.source_description(),
        })
    }
}
