//! Word unscrambler command
//!
//! Finds every word that can be built from a set of letter tiles.

use super::{QueryError, require_loaded};
use crate::config::QueryLimits;
use crate::core::LetterBag;
use crate::corpus::Corpus;
use crate::solver::{MIN_WORD_LEN, ScoredWord, solve_bag};

/// What to unscramble and how much to report
pub struct UnscrambleConfig {
    pub letters: String,
    /// Shortest word to report (never below two letters)
    pub min_length: usize,
    /// Report at most this many words; `None` reports all
    pub limit: Option<usize>,
}

impl UnscrambleConfig {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            min_length: MIN_WORD_LEN,
            limit: None,
        }
    }
}

/// Result of unscrambling a letter bag
pub struct UnscrambleResult<'c> {
    /// Normalized tiles, letters first then wildcards
    pub tiles: String,
    pub wildcards: usize,
    /// Words found before applying `limit`
    pub total: usize,
    /// Ranked words, best first
    pub words: Vec<ScoredWord<'c>>,
}

impl UnscrambleResult<'_> {
    /// Highest scoring word, if any
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord<'_>> {
        self.words.first()
    }

    /// Words dropped by the limit
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.total - self.words.len()
    }
}

/// Unscramble a letter bag
///
/// # Errors
///
/// Returns an error if:
/// - The corpus has not been loaded
/// - The input contains no letters or wildcards
/// - The input has more tiles than `limits.max_letters`
pub fn unscramble<'c>(
    corpus: &'c Corpus,
    config: &UnscrambleConfig,
    limits: &QueryLimits,
) -> Result<UnscrambleResult<'c>, QueryError> {
    require_loaded(corpus)?;

    let bag = LetterBag::parse(&config.letters);
    if bag.is_empty() {
        return Err(QueryError::NoLetters);
    }
    if bag.len() > limits.max_letters {
        return Err(QueryError::TooManyLetters {
            len: bag.len(),
            max: limits.max_letters,
        });
    }

    let min_length = config.min_length.max(MIN_WORD_LEN);
    let mut words: Vec<ScoredWord<'c>> = solve_bag(corpus, &bag)
        .into_iter()
        .filter(|found| found.len() >= min_length)
        .collect();

    let total = words.len();
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }

    Ok(UnscrambleResult {
        tiles: bag.to_string(),
        wildcards: bag.wildcards(),
        total,
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::TextSource;

    fn corpus() -> Corpus {
        Corpus::from_words(["bat", "tab", "at", "ta", "tabs", "stab", "bats"])
    }

    #[test]
    fn unscramble_reports_ranked_words() {
        let corpus = corpus();
        let result =
            unscramble(&corpus, &UnscrambleConfig::new("bats"), &QueryLimits::default()).unwrap();

        assert_eq!(result.tiles, "abst");
        assert_eq!(result.wildcards, 0);
        assert_eq!(result.total, 7);
        assert_eq!(result.hidden(), 0);
        assert_eq!(result.best().map(|b| b.word), Some("bats"));
    }

    #[test]
    fn unscramble_min_length_filters_short_words() {
        let corpus = corpus();
        let mut config = UnscrambleConfig::new("bats");
        config.min_length = 4;

        let result = unscramble(&corpus, &config, &QueryLimits::default()).unwrap();
        let words: Vec<&str> = result.words.iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["bats", "stab", "tabs"]);
    }

    #[test]
    fn unscramble_limit_truncates() {
        let corpus = corpus();
        let mut config = UnscrambleConfig::new("bats");
        config.limit = Some(2);

        let result = unscramble(&corpus, &config, &QueryLimits::default()).unwrap();
        assert_eq!(result.words.len(), 2);
        assert_eq!(result.total, 7);
        assert_eq!(result.hidden(), 5);
    }

    #[test]
    fn unscramble_rejects_empty_input() {
        let corpus = corpus();
        let result = unscramble(&corpus, &UnscrambleConfig::new("12 !"), &QueryLimits::default());
        assert_eq!(result.err(), Some(QueryError::NoLetters));
    }

    #[test]
    fn unscramble_rejects_too_many_letters() {
        let corpus = corpus();
        let limits = QueryLimits {
            max_letters: 3,
            ..QueryLimits::default()
        };
        let result = unscramble(&corpus, &UnscrambleConfig::new("ba?s"), &limits);
        assert_eq!(
            result.err(),
            Some(QueryError::TooManyLetters { len: 4, max: 3 })
        );
    }

    #[test]
    fn unscramble_requires_loaded_corpus() {
        let corpus = Corpus::new(TextSource::new("bat"));
        let result = unscramble(&corpus, &UnscrambleConfig::new("bat"), &QueryLimits::default());
        assert!(matches!(
            result.err(),
            Some(QueryError::CorpusUnavailable { .. })
        ));
    }

    #[test]
    fn unscramble_with_wildcards_reports_them() {
        let corpus = corpus();
        let result =
            unscramble(&corpus, &UnscrambleConfig::new("B?T"), &QueryLimits::default()).unwrap();
        assert_eq!(result.tiles, "bt?");
        assert_eq!(result.wildcards, 1);
        let words: Vec<&str> = result.words.iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["bat", "tab", "at", "ta"]);
    }
}
