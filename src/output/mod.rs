//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_anagrams, print_benchmark_result, print_corpus_report, print_pattern_result,
    print_unscramble_result, print_word_check,
};
