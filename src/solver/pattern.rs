//! Crossword pattern matching over the corpus

use crate::core::Pattern;
use crate::corpus::Corpus;
use tracing::debug;

/// All corpus words matching a pattern string, in corpus order
///
/// Malformed patterns (empty, or containing characters other than letters
/// and `?`) and an unloaded corpus both produce an empty result. Callers are
/// responsible for truncating large result sets.
///
/// # Examples
/// ```
/// use wordfinder::corpus::Corpus;
/// use wordfinder::solver::match_pattern;
///
/// let corpus = Corpus::from_words(["cat", "cot", "cut", "bat"]);
/// assert_eq!(match_pattern(&corpus, "c?t"), vec!["cat", "cot", "cut"]);
/// assert_eq!(match_pattern(&corpus, "?AT"), vec!["cat", "bat"]);
/// assert!(match_pattern(&corpus, "").is_empty());
/// ```
#[must_use]
pub fn match_pattern<'c>(corpus: &'c Corpus, pattern: &str) -> Vec<&'c str> {
    match Pattern::parse(pattern) {
        Ok(parsed) => match_parsed(corpus, &parsed),
        Err(err) => {
            debug!(pattern, error = %err, "ignoring malformed pattern");
            Vec::new()
        }
    }
}

/// All corpus words matching an already parsed pattern, in corpus order
#[must_use]
pub fn match_parsed<'c>(corpus: &'c Corpus, pattern: &Pattern) -> Vec<&'c str> {
    let Some(data) = corpus.data() else {
        return Vec::new();
    };

    // Only words of the pattern's length can match; the bucket keeps corpus order
    let matches: Vec<&str> = data
        .with_length(pattern.len())
        .filter(|word| pattern.matches(word))
        .collect();

    debug!(%pattern, matches = matches.len(), "pattern query");
    matches
}
