//! Letter-bag solving
//!
//! Finds every corpus word that can be laid from a bag of tiles, where each
//! tile is used at most once and `?` tiles stand in for any letter. Results
//! are scored with the tile point table and ranked.

use crate::core::{LetterBag, signature, word_score};
use crate::corpus::Corpus;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Shortest word the solver reports
pub const MIN_WORD_LEN: usize = 2;

/// A word found in a letter bag together with its point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredWord<'c> {
    pub word: &'c str,
    pub score: u32,
}

impl ScoredWord<'_> {
    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Result ranking: score descending, then shorter words, then alphabetical
#[must_use]
pub fn rank(a: &ScoredWord<'_>, b: &ScoredWord<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.len().cmp(&b.len()))
        .then(a.word.cmp(b.word))
}

/// Every corpus word buildable from the letters in `input`
///
/// The input is lowercased and stripped of everything except `a`-`z` and
/// `?`. Only words of at least two letters and at most as many letters as
/// there are tiles are considered. Wildcard-filled letters still score as the
/// letter they represent.
///
/// Returns an empty list when the corpus is not loaded or the input holds no
/// letters or wildcards.
///
/// # Examples
/// ```
/// use wordfinder::corpus::Corpus;
/// use wordfinder::solver::solve;
///
/// let corpus = Corpus::from_words(["bat", "tab", "at", "ta"]);
/// let words: Vec<(&str, u32)> = solve(&corpus, "bat")
///     .iter()
///     .map(|m| (m.word, m.score))
///     .collect();
/// assert_eq!(words, vec![("bat", 5), ("tab", 5), ("at", 2), ("ta", 2)]);
/// ```
#[must_use]
pub fn solve<'c>(corpus: &'c Corpus, input: &str) -> Vec<ScoredWord<'c>> {
    solve_bag(corpus, &LetterBag::parse(input))
}

/// Every corpus word buildable from an already parsed bag, ranked
#[must_use]
pub fn solve_bag<'c>(corpus: &'c Corpus, bag: &LetterBag) -> Vec<ScoredWord<'c>> {
    let Some(data) = corpus.data() else {
        return Vec::new();
    };
    if bag.is_empty() {
        return Vec::new();
    }

    let max_len = bag.len();
    let mut found: Vec<ScoredWord<'c>> = data
        .words()
        .par_iter()
        .zip(data.profile_slice().par_iter())
        .filter(|(word, _)| (MIN_WORD_LEN..=max_len).contains(&word.len()))
        .filter(|(_, profile)| bag.can_build(profile))
        .map(|(word, _)| ScoredWord {
            word: word.as_str(),
            score: word_score(word),
        })
        .collect();

    found.sort_unstable_by(rank);

    debug!(bag = %bag, matches = found.len(), "letter bag query");
    found
}

/// Corpus words using exactly the given letters, in corpus order
///
/// Wildcards and other non-letters in `input` are ignored.
///
/// # Examples
/// ```
/// use wordfinder::corpus::Corpus;
/// use wordfinder::solver::exact_anagrams;
///
/// let corpus = Corpus::from_words(["listen", "enlist", "silent", "tinsel", "list"]);
/// assert_eq!(
///     exact_anagrams(&corpus, "Silent"),
///     vec!["listen", "enlist", "silent", "tinsel"]
/// );
/// ```
#[must_use]
pub fn exact_anagrams<'c>(corpus: &'c Corpus, input: &str) -> Vec<&'c str> {
    let Some(data) = corpus.data() else {
        return Vec::new();
    };

    let letters: String = input
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect();
    if letters.is_empty() {
        return Vec::new();
    }

    data.anagram_group(&signature(&letters)).collect()
}

/// Solver results grouped by word length, longest group first
///
/// Each group keeps the order of `results`.
#[must_use]
pub fn group_by_length<'c>(results: &[ScoredWord<'c>]) -> Vec<(usize, Vec<ScoredWord<'c>>)> {
    let mut groups: Vec<(usize, Vec<ScoredWord<'c>>)> = Vec::new();
    for &result in results {
        match groups.iter_mut().find(|(len, _)| *len == result.len()) {
            Some((_, group)) => group.push(result),
            None => groups.push((result.len(), vec![result])),
        }
    }
    groups.sort_by(|(a, _), (b, _)| b.cmp(a));
    groups
}
