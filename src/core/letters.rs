//! Letter multisets
//!
//! Both dictionary words and query letter bags are reduced to a fixed-size
//! count array over `a`-`z`. A bag additionally carries a wildcard counter for
//! blank tiles.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Query token standing in for any single letter
pub const WILDCARD: char = '?';

/// Per-letter counts of a word plus a presence bitmask
///
/// Bit `i` of the mask is set when letter `b'a' + i` occurs at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_LEN],
    mask: u32,
}

impl LetterCounts {
    /// Count the letters of a lowercase `a`-`z` word
    ///
    /// Returns `None` if the word contains anything else.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_word("letter").unwrap();
    /// assert_eq!(counts.count(b't'), 2);
    /// assert_eq!(counts.total(), 6);
    /// assert!(LetterCounts::from_word("Letter").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = Self::default();
        for &byte in word.as_bytes() {
            if !byte.is_ascii_lowercase() {
                return None;
            }
            counts.add(byte);
        }
        Some(counts)
    }

    #[inline]
    fn add(&mut self, letter: u8) {
        let idx = usize::from(letter - b'a');
        self.counts[idx] += 1;
        self.mask |= 1 << idx;
    }

    /// How many times `letter` (lowercase ASCII) occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            self.counts[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Presence bitmask, one bit per letter
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Letters of `needed` that these counts cannot cover
    ///
    /// This is the number of wildcards required to build `needed` from `self`.
    #[inline]
    #[must_use]
    pub fn shortfall(&self, needed: &Self) -> usize {
        needed
            .counts
            .iter()
            .zip(&self.counts)
            .map(|(&need, &have)| need.saturating_sub(have) as usize)
            .sum()
    }
}

/// A query's available tiles: letters plus blank (`?`) tiles
///
/// # Examples
/// ```
/// use wordfinder::core::{LetterBag, LetterCounts};
///
/// let bag = LetterBag::parse("B?t!");
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.wildcards(), 1);
///
/// let bit = LetterCounts::from_word("bit").unwrap();
/// assert!(bag.can_build(&bit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterBag {
    letters: LetterCounts,
    wildcards: usize,
    len: usize,
}

impl LetterBag {
    /// Normalize raw input into a bag
    ///
    /// Input is lowercased and every character that is neither `a`-`z` nor
    /// `?` is dropped.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut bag = Self::default();
        for ch in input.chars().map(|c| c.to_ascii_lowercase()) {
            if ch == WILDCARD {
                bag.wildcards += 1;
            } else if ch.is_ascii_lowercase() {
                bag.letters.add(ch as u8);
            } else {
                continue;
            }
            bag.len += 1;
        }
        bag
    }

    /// Number of tiles, wildcards included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of blank tiles
    #[inline]
    #[must_use]
    pub const fn wildcards(&self) -> usize {
        self.wildcards
    }

    /// The non-wildcard tiles
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }

    /// Whether a word with these letter counts can be laid from the bag
    ///
    /// Each tile fills at most one position. A letter is taken from its own
    /// tiles first and falls back to a wildcard, which is the same outcome as
    /// consuming tiles greedily position by position.
    #[inline]
    #[must_use]
    pub fn can_build(&self, word: &LetterCounts) -> bool {
        // Every distinct letter missing from the bag costs at least one wildcard
        let missing_kinds = (word.mask() & !self.letters.mask()).count_ones() as usize;
        if missing_kinds > self.wildcards {
            return false;
        }
        self.letters.shortfall(word) <= self.wildcards
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, &count) in (b'a'..=b'z').zip(&self.letters.counts) {
            for _ in 0..count {
                write!(f, "{}", char::from(letter))?;
            }
        }
        for _ in 0..self.wildcards {
            write!(f, "{WILDCARD}")?;
        }
        Ok(())
    }
}

/// Sorted-letter key shared by all anagrams of a word
///
/// # Examples
/// ```
/// use wordfinder::core::signature;
///
/// assert_eq!(signature("listen"), signature("silent"));
/// ```
#[must_use]
pub fn signature(word: &str) -> Box<[u8]> {
    let mut bytes = word.as_bytes().to_vec();
    bytes.sort_unstable();
    bytes.into_boxed_slice()
}
