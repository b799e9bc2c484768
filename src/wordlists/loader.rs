//! Word list parsing
//!
//! Turns line-delimited text into normalized dictionary entries.

/// Result of parsing a word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedWordList {
    /// Lowercase `a`-`z` words in file order
    pub words: Vec<String>,
    /// Non-empty lines rejected because they contain other characters
    pub dropped: usize,
}

/// Parse a line-delimited word list
///
/// Each line is trimmed and lowercased; blank lines are skipped. Lines that
/// still contain anything other than `a`-`z` (digits, apostrophes, inner
/// spaces, accented letters) are counted in `dropped`. Duplicates are kept.
///
/// # Examples
/// ```
/// use wordfinder::wordlists::parse_word_list;
///
/// let parsed = parse_word_list("Cat\n\n  dog \ndon't\n");
/// assert_eq!(parsed.words, vec!["cat", "dog"]);
/// assert_eq!(parsed.dropped, 1);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> ParsedWordList {
    let mut parsed = ParsedWordList::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match normalize_word(trimmed) {
            Some(word) => parsed.words.push(word),
            None => parsed.dropped += 1,
        }
    }

    parsed
}

/// Lowercase a word, rejecting anything outside `a`-`z`
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.to_lowercase();
    (!word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())).then_some(word)
}
