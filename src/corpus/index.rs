//! Lookup structures built once per loaded word list

use crate::core::{LetterCounts, signature};
use rustc_hash::FxHashMap;

/// A loaded word list together with its derived indexes
///
/// Immutable after construction.
#[derive(Debug)]
pub(crate) struct CorpusData {
    words: Vec<String>,
    /// Letter counts per word, parallel to `words`
    profiles: Vec<LetterCounts>,
    /// Word indices grouped by word length, each group in corpus order
    by_length: Vec<Vec<usize>>,
    /// Word indices keyed by sorted letters
    signatures: FxHashMap<Box<[u8]>, Vec<usize>>,
}

impl CorpusData {
    /// Index a list of normalized words
    ///
    /// Words must already be lowercase `a`-`z`; anything else is skipped.
    pub(crate) fn build(words: Vec<String>) -> Self {
        let mut kept = Vec::with_capacity(words.len());
        let mut profiles = Vec::with_capacity(words.len());
        let mut by_length: Vec<Vec<usize>> = Vec::new();
        let mut signatures: FxHashMap<Box<[u8]>, Vec<usize>> = FxHashMap::default();

        for word in words {
            let Some(profile) = LetterCounts::from_word(&word) else {
                continue;
            };
            if word.is_empty() {
                continue;
            }

            let idx = kept.len();
            if by_length.len() <= word.len() {
                by_length.resize_with(word.len() + 1, Vec::new);
            }
            by_length[word.len()].push(idx);
            signatures.entry(signature(&word)).or_default().push(idx);
            profiles.push(profile);
            kept.push(word);
        }

        Self {
            words: kept,
            profiles,
            by_length,
            signatures,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub(crate) fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    pub(crate) fn word(&self, idx: usize) -> &str {
        &self.words[idx]
    }

    /// Indexed access for parallel scans
    #[inline]
    pub(crate) fn profile_slice(&self) -> &[LetterCounts] {
        &self.profiles
    }

    /// Words of exactly `len` letters, in corpus order
    pub(crate) fn with_length(&self, len: usize) -> impl Iterator<Item = &str> {
        self.by_length
            .get(len)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&idx| self.word(idx))
    }

    /// Words whose sorted letters equal `key`, in corpus order
    pub(crate) fn anagram_group(&self, key: &[u8]) -> impl Iterator<Item = &str> {
        self.signatures
            .get(key)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&idx| self.word(idx))
    }

    pub(crate) fn contains(&self, word: &str) -> bool {
        self.anagram_group(&signature(word)).any(|w| w == word)
    }

    /// `(length, count)` pairs for every length present, shortest first
    pub(crate) fn length_histogram(&self) -> Vec<(usize, usize)> {
        self.by_length
            .iter()
            .enumerate()
            .filter(|(_, group)| !group.is_empty())
            .map(|(len, group)| (len, group.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> CorpusData {
        CorpusData::build(words.iter().map(|w| (*w).to_string()).collect())
    }

    #[test]
    fn build_keeps_corpus_order() {
        let data = build(&["cat", "at", "bat"]);
        assert_eq!(data.len(), 3);
        assert_eq!(data.words(), &["cat", "at", "bat"]);
        assert_eq!(data.word(1), "at");
    }

    #[test]
    fn build_skips_invalid_entries() {
        let data = build(&["cat", "", "Dog", "x-ray", "bat"]);
        assert_eq!(data.words(), &["cat", "bat"]);
        assert_eq!(data.profile_slice().len(), 2);
    }

    #[test]
    fn length_buckets_preserve_order() {
        let data = build(&["cot", "at", "cat", "tab", "on"]);
        let threes: Vec<&str> = data.with_length(3).collect();
        assert_eq!(threes, vec!["cot", "cat", "tab"]);
        let twos: Vec<&str> = data.with_length(2).collect();
        assert_eq!(twos, vec!["at", "on"]);
        assert_eq!(data.with_length(9).count(), 0);
        assert_eq!(data.with_length(0).count(), 0);
    }

    #[test]
    fn anagram_groups_share_signature() {
        let data = build(&["bat", "cat", "tab", "act"]);
        let group: Vec<&str> = data.anagram_group(b"abt").collect();
        assert_eq!(group, vec!["bat", "tab"]);
        assert_eq!(data.anagram_group(b"xyz").count(), 0);
    }

    #[test]
    fn contains_checks_exact_word() {
        let data = build(&["bat", "tab"]);
        assert!(data.contains("bat"));
        assert!(data.contains("tab"));
        assert!(!data.contains("abt"));
        assert!(!data.contains(""));
    }

    #[test]
    fn histogram_counts_lengths() {
        let data = build(&["a", "at", "cat", "bat", "table"]);
        assert_eq!(data.length_histogram(), vec![(1, 1), (2, 1), (3, 2), (5, 1)]);
    }

    #[test]
    fn profiles_line_up_with_words() {
        let data = build(&["aa", "b"]);
        let totals: Vec<usize> = data.profile_slice().iter().map(LetterCounts::total).collect();
        assert_eq!(totals, vec![2, 1]);
        assert_eq!(data.profile_slice()[0].count(b'a'), 2);
    }
}
