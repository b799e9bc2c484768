//! Crossword pattern command

use super::{QueryError, require_loaded};
use crate::core::Pattern;
use crate::corpus::Corpus;
use crate::solver::match_parsed;

/// Result of a pattern search
pub struct PatternResult<'c> {
    /// Normalized pattern
    pub pattern: String,
    /// Words matching before truncation
    pub total: usize,
    /// First `limit` matches in dictionary order
    pub shown: Vec<&'c str>,
}

impl PatternResult<'_> {
    /// Matches not shown because of the limit
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.total - self.shown.len()
    }
}

/// Find words matching a crossword pattern, keeping the first `limit`
///
/// # Errors
///
/// Returns an error if the corpus has not been loaded or the pattern is
/// malformed.
pub fn find_pattern<'c>(
    corpus: &'c Corpus,
    pattern: &str,
    limit: usize,
) -> Result<PatternResult<'c>, QueryError> {
    require_loaded(corpus)?;
    let parsed = Pattern::parse(pattern)?;

    let mut shown = match_parsed(corpus, &parsed);
    let total = shown.len();
    shown.truncate(limit);

    Ok(PatternResult {
        pattern: parsed.to_string(),
        total,
        shown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PatternError;

    #[test]
    fn find_pattern_returns_matches() {
        let corpus = Corpus::from_words(["cat", "cot", "cut", "bat"]);
        let result = find_pattern(&corpus, "C?T", 100).unwrap();

        assert_eq!(result.pattern, "c?t");
        assert_eq!(result.total, 3);
        assert_eq!(result.shown, vec!["cat", "cot", "cut"]);
        assert_eq!(result.hidden(), 0);
    }

    #[test]
    fn find_pattern_truncates_to_limit() {
        let corpus = Corpus::from_words(["cat", "cot", "cut", "bat"]);
        let result = find_pattern(&corpus, "???", 2).unwrap();

        assert_eq!(result.total, 4);
        assert_eq!(result.shown, vec!["cat", "cot"]);
        assert_eq!(result.hidden(), 2);
    }

    #[test]
    fn find_pattern_no_matches_is_ok() {
        let corpus = Corpus::from_words(["cat"]);
        let result = find_pattern(&corpus, "z??", 10).unwrap();
        assert_eq!(result.total, 0);
        assert!(result.shown.is_empty());
    }

    #[test]
    fn find_pattern_reports_malformed_pattern() {
        let corpus = Corpus::from_words(["cat"]);
        assert_eq!(
            find_pattern(&corpus, "", 10).err(),
            Some(QueryError::InvalidPattern(PatternError::Empty))
        );
        assert!(matches!(
            find_pattern(&corpus, "c#t", 10).err(),
            Some(QueryError::InvalidPattern(
                PatternError::InvalidCharacter { ch: '#', .. }
            ))
        ));
    }
}
