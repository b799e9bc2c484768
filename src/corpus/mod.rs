//! The in-memory dictionary
//!
//! A `Corpus` is constructed around a `WordSource` and stays empty until
//! `load()` succeeds. After that it never changes: queries borrow it
//! read-only and may run on any number of threads at once.
//!
//! Loading is idempotent and single-flight. Concurrent callers serialize on a
//! gate, the first one fetches and publishes the data, and everyone after
//! that gets the stored stats back without touching the source again. A
//! failed fetch is reported as `loaded: false` and is not cached, so a later
//! call may try again.

mod index;

pub(crate) use index::CorpusData;

use crate::config::LoadConfig;
use crate::wordlists::{EmbeddedSource, SourceError, TextSource, WordSource, parse_word_list};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of a load, as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    pub total_words: usize,
    pub loaded: bool,
}

impl LoadStats {
    /// Nothing loaded (yet, or after a failed fetch)
    pub const UNLOADED: Self = Self {
        total_words: 0,
        loaded: false,
    };
}

/// A dictionary that loads its word list at most once
pub struct Corpus {
    source: Box<dyn WordSource>,
    config: LoadConfig,
    data: OnceLock<CorpusData>,
    gate: Mutex<()>,
}

impl Corpus {
    /// Create an unloaded corpus reading from `source`
    pub fn new(source: impl WordSource + 'static) -> Self {
        Self::with_config(source, LoadConfig::default())
    }

    /// Create an unloaded corpus with explicit load settings
    pub fn with_config(source: impl WordSource + 'static, config: LoadConfig) -> Self {
        Self {
            source: Box::new(source),
            config,
            data: OnceLock::new(),
            gate: Mutex::new(()),
        }
    }

    /// Unloaded corpus over the embedded dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Build and load a corpus from an in-memory list of words
    ///
    /// # Examples
    /// ```
    /// use wordfinder::corpus::Corpus;
    ///
    /// let corpus = Corpus::from_words(["cat", "Cot", "", "cut"]);
    /// assert!(corpus.is_ready());
    /// assert_eq!(corpus.stats().total_words, 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let corpus = Self::with_config(TextSource::from_words(words), LoadConfig::once());
        corpus.load();
        corpus
    }

    /// Load the word list if it has not been loaded yet
    ///
    /// Never fails: a source that cannot be read after the configured number
    /// of attempts yields `LoadStats::UNLOADED`.
    pub fn load(&self) -> LoadStats {
        if let Some(data) = self.data.get() {
            return Self::stats_for(data);
        }

        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished while we waited on the gate
        if let Some(data) = self.data.get() {
            return Self::stats_for(data);
        }

        let started = Instant::now();
        let text = match self.fetch_with_retry() {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    source = %self.source.describe(),
                    error = %err,
                    "word list unavailable, corpus stays unloaded"
                );
                return LoadStats::UNLOADED;
            }
        };

        let parsed = parse_word_list(&text);
        if parsed.dropped > 0 {
            debug!(
                dropped = parsed.dropped,
                "skipped word list entries with characters outside a-z"
            );
        }

        let data = self.data.get_or_init(|| CorpusData::build(parsed.words));
        let stats = Self::stats_for(data);

        if stats.total_words == 0 {
            warn!(source = %self.source.describe(), "word list loaded but contains no words");
        }
        info!(
            source = %self.source.describe(),
            words = stats.total_words,
            elapsed = ?started.elapsed(),
            "corpus loaded"
        );

        stats
    }

    fn fetch_with_retry(&self) -> Result<String, SourceError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.source.fetch() {
                Ok(text) => return Ok(text),
                Err(err) if attempt < max_attempts => {
                    warn!(
                        source = %self.source.describe(),
                        attempt,
                        max_attempts,
                        error = %err,
                        "word list fetch failed, retrying"
                    );
                    thread::sleep(self.config.retry_delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn stats_for(data: &CorpusData) -> LoadStats {
        LoadStats {
            total_words: data.len(),
            loaded: true,
        }
    }

    /// Current status without triggering a load
    #[must_use]
    pub fn stats(&self) -> LoadStats {
        self.data.get().map_or(LoadStats::UNLOADED, Self::stats_for)
    }

    /// Whether a load has succeeded
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.data.get().is_some()
    }

    /// Where this corpus reads its words from
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Loaded data, if any
    pub(crate) fn data(&self) -> Option<&CorpusData> {
        self.data.get()
    }

    /// All words in corpus order; empty before a successful load
    #[must_use]
    pub fn words(&self) -> &[String] {
        self.data().map_or(&[][..], CorpusData::words)
    }

    /// Exact, case-insensitive dictionary membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.data()
            .is_some_and(|data| data.contains(&word.trim().to_ascii_lowercase()))
    }

    /// `(length, count)` pairs for every word length present, shortest first
    #[must_use]
    pub fn length_histogram(&self) -> Vec<(usize, usize)> {
        self.data()
            .map(CorpusData::length_histogram)
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus")
            .field("source", &self.source.describe())
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
