//! Letter point values
//!
//! Standard word-game tile values: common letters are worth 1, rare ones up
//! to 10. The table is constant for the lifetime of the process.

/// Points for `a` through `z`
const LETTER_POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Point value of a single letter
///
/// Case-insensitive. Anything that is not an ASCII letter scores 0.
///
/// # Examples
/// ```
/// use wordfinder::core::score_of;
///
/// assert_eq!(score_of('e'), 1);
/// assert_eq!(score_of('Q'), 10);
/// assert_eq!(score_of('?'), 0);
/// ```
#[inline]
#[must_use]
pub fn score_of(letter: char) -> u32 {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        LETTER_POINTS[usize::from(lower as u8 - b'a')]
    } else {
        0
    }
}

/// Sum of the letter values of a word
///
/// # Examples
/// ```
/// use wordfinder::core::word_score;
///
/// assert_eq!(word_score("bat"), 5);
/// assert_eq!(word_score("quiz"), 22);
/// ```
#[must_use]
pub fn word_score(word: &str) -> u32 {
    word.chars().map(score_of).sum()
}
