//! Corpus status report

use crate::corpus::{Corpus, LoadStats};

/// Summary of a corpus for display
pub struct CorpusReport {
    pub source: String,
    pub stats: LoadStats,
    /// `(length, count)` pairs, shortest first
    pub by_length: Vec<(usize, usize)>,
}

impl CorpusReport {
    /// Length of the longest word, if any are loaded
    #[must_use]
    pub fn longest(&self) -> Option<usize> {
        self.by_length.last().map(|&(len, _)| len)
    }

    /// Most common word length
    #[must_use]
    pub fn most_common_length(&self) -> Option<usize> {
        self.by_length
            .iter()
            .max_by(|(len_a, count_a), (len_b, count_b)| {
                count_a.cmp(count_b).then(len_b.cmp(len_a))
            })
            .map(|&(len, _)| len)
    }
}

/// Describe a corpus without triggering a load
#[must_use]
pub fn corpus_report(corpus: &Corpus) -> CorpusReport {
    CorpusReport {
        source: corpus.source_description(),
        stats: corpus.stats(),
        by_length: corpus.length_histogram(),
    }
}
