//! End-to-end behaviour of the corpus, pattern matcher and solver

use std::cmp::Ordering;
use wordfinder::config::LoadConfig;
use wordfinder::core::{signature, word_score};
use wordfinder::corpus::{Corpus, LoadStats};
use wordfinder::solver::{exact_anagrams, match_pattern, rank, solve};
use wordfinder::wordlists::{SourceError, WordSource};

struct Offline;

impl WordSource for Offline {
    fn describe(&self) -> String {
        "https://words.invalid/list.txt".to_string()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        Err(SourceError::Unavailable {
            location: self.describe(),
            reason: "connection refused".to_string(),
        })
    }
}

fn embedded() -> Corpus {
    let corpus = Corpus::embedded();
    assert!(corpus.load().loaded);
    corpus
}

/// Lay tiles one letter at a time, falling back to blanks
fn buildable(word: &str, bag: &str) -> bool {
    let mut tiles: Vec<char> = bag
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || *c == '?')
        .collect();
    for letter in word.chars() {
        if let Some(pos) = tiles.iter().position(|&t| t == letter) {
            tiles.swap_remove(pos);
        } else if let Some(pos) = tiles.iter().position(|&t| t == '?') {
            tiles.swap_remove(pos);
        } else {
            return false;
        }
    }
    true
}

fn agrees(word: &str, pattern: &str) -> bool {
    word.len() == pattern.len()
        && word
            .bytes()
            .zip(pattern.bytes())
            .all(|(w, p)| p == b'?' || w == p)
}

#[test]
fn pattern_with_middle_wildcard() {
    let corpus = Corpus::from_words(["cat", "cot", "cut", "bat"]);
    assert_eq!(match_pattern(&corpus, "c?t"), vec!["cat", "cot", "cut"]);
}

#[test]
fn pattern_with_leading_wildcard() {
    let corpus = Corpus::from_words(["cat", "cot", "cut", "bat"]);
    assert_eq!(match_pattern(&corpus, "?at"), vec!["cat", "bat"]);
}

#[test]
fn solve_ranks_by_score_then_length() {
    let corpus = Corpus::from_words(["bat", "tab", "at", "ta"]);
    let found = solve(&corpus, "bat");

    let words: Vec<(&str, u32)> = found.iter().map(|w| (w.word, w.score)).collect();
    assert_eq!(words, vec![("bat", 5), ("tab", 5), ("at", 2), ("ta", 2)]);
}

#[test]
fn wildcard_fills_the_vowel() {
    let corpus = Corpus::from_words(["bat", "bit", "but", "bet", "boot"]);
    let found = solve(&corpus, "b?t");

    let mut words: Vec<&str> = found.iter().map(|w| w.word).collect();
    words.sort_unstable();
    assert_eq!(words, vec!["bat", "bet", "bit", "but"]);
    assert!(found.iter().all(|w| w.score == word_score(w.word)));
}

#[test]
fn empty_queries_return_nothing() {
    let corpus = Corpus::from_words(["cat", "at"]);
    assert!(match_pattern(&corpus, "").is_empty());
    assert!(solve(&corpus, "").is_empty());
    assert!(solve(&corpus, "123 !").is_empty());
}

#[test]
fn failed_load_degrades_to_empty_results() {
    let corpus = Corpus::with_config(Offline, LoadConfig::once());

    assert_eq!(corpus.load(), LoadStats::UNLOADED);
    assert!(match_pattern(&corpus, "c?t").is_empty());
    assert!(solve(&corpus, "cat").is_empty());
    assert!(exact_anagrams(&corpus, "cat").is_empty());
}

#[test]
fn load_is_idempotent() {
    let corpus = Corpus::embedded();
    let first = corpus.load();
    let second = corpus.load();

    assert!(first.loaded);
    assert_eq!(first, second);
    assert_eq!(corpus.stats(), first);
}

#[test]
fn pattern_matching_is_sound_and_complete() {
    let corpus = embedded();
    for pattern in ["c?t", "?a??", "s????", "??e", "?????ing", "q?"] {
        let expected: Vec<&str> = corpus
            .words()
            .iter()
            .map(String::as_str)
            .filter(|w| agrees(w, pattern))
            .collect();
        assert_eq!(match_pattern(&corpus, pattern), expected, "pattern {pattern}");
    }
}

#[test]
fn pattern_matching_is_stable() {
    let corpus = embedded();
    let first = match_pattern(&corpus, "?o??");
    assert_eq!(first, match_pattern(&corpus, "?o??"));
    assert_eq!(first, match_pattern(&corpus, "?O??"));
}

#[test]
fn solver_results_are_buildable_and_complete() {
    let corpus = embedded();
    for bag in ["retains", "quiz", "aab?", "??", "streamline", "zzz?"] {
        let found = solve(&corpus, bag);
        assert!(
            found.iter().all(|w| buildable(w.word, bag)),
            "unbuildable word for {bag}"
        );

        let expected = corpus
            .words()
            .iter()
            .filter(|w| w.len() >= 2 && buildable(w, bag))
            .count();
        assert_eq!(found.len(), expected, "bag {bag}");
    }
}

#[test]
fn solver_never_overcounts_repeated_letters() {
    let long = "a".repeat(256);
    let corpus = Corpus::from_words([long.as_str(), "ab", "aa"]);

    let bag = format!("{}b", "a".repeat(255));
    let found = solve(&corpus, &bag);
    assert!(found.iter().all(|w| buildable(w.word, &bag)));
    assert!(found.iter().all(|w| w.word != long));
    assert_eq!(found.len(), 2);

    let filled = format!("{}?", "a".repeat(255));
    assert!(solve(&corpus, &filled).iter().any(|w| w.word == long));
}

#[test]
fn solver_results_are_strictly_ordered() {
    let corpus = embedded();
    let found = solve(&corpus, "painters?");
    assert!(!found.is_empty());

    for pair in found.windows(2) {
        assert_eq!(rank(&pair[0], &pair[1]), Ordering::Less);
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].len() <= pair[1].len());
        }
    }
}

#[test]
fn exact_anagrams_share_letters() {
    let corpus = embedded();
    let query = "tsop";
    let found = exact_anagrams(&corpus, query);

    assert!(found.contains(&"stop"));
    assert!(found.iter().all(|w| signature(w) == signature(query)));
}

#[test]
fn concurrent_queries_agree() {
    let corpus = embedded();
    let expected = solve(&corpus, "garden");

    let shared = &corpus;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || solve(shared, "garden")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
