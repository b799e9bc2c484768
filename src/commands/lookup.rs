//! Dictionary lookups: membership checks and exact anagrams

use super::{QueryError, require_loaded};
use crate::core::word_score;
use crate::corpus::Corpus;
use crate::solver::exact_anagrams;

/// What the dictionary knows about a single word
pub struct WordCheck<'c> {
    pub word: String,
    pub in_dictionary: bool,
    pub score: u32,
    /// Other dictionary words made of exactly the same letters
    pub anagrams: Vec<&'c str>,
}

/// Look up a word in the dictionary
///
/// # Errors
///
/// Returns an error if the corpus has not been loaded or the word contains
/// no letters.
pub fn check_word<'c>(corpus: &'c Corpus, word: &str) -> Result<WordCheck<'c>, QueryError> {
    require_loaded(corpus)?;

    let normalized: String = word
        .trim()
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect();
    if normalized.is_empty() {
        return Err(QueryError::NoLetters);
    }

    let anagrams = exact_anagrams(corpus, &normalized)
        .into_iter()
        .filter(|&other| other != normalized)
        .collect();

    Ok(WordCheck {
        in_dictionary: corpus.contains(&normalized),
        score: word_score(&normalized),
        anagrams,
        word: normalized,
    })
}

/// Dictionary words using exactly the given letters
///
/// # Errors
///
/// Returns an error if the corpus has not been loaded or the input contains
/// no letters.
pub fn find_anagrams<'c>(corpus: &'c Corpus, letters: &str) -> Result<Vec<&'c str>, QueryError> {
    require_loaded(corpus)?;
    if !letters.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(QueryError::NoLetters);
    }
    Ok(exact_anagrams(corpus, letters))
}
