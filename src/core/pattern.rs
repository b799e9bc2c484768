//! Crossword-style letter patterns
//!
//! A pattern fixes the length of a word and some of its letters. Every `?`
//! stands for exactly one unknown letter at that position, e.g. `c?t` matches
//! `cat`, `cot` and `cut` but not `cart`.

use super::letters::WILDCARD;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed-length pattern of known letters and wildcard slots
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

/// Why a pattern string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("invalid character {ch:?} at position {position}, use letters and '?' only")]
    InvalidCharacter { ch: char, position: usize },
}

impl Pattern {
    /// Parse a pattern string
    ///
    /// Surrounding whitespace is ignored and letters are case-insensitive.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is empty or contains anything
    /// other than ASCII letters and `?`.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::Pattern;
    ///
    /// let pattern = Pattern::parse("C?T").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert!(pattern.matches("cat"));
    /// assert!(!pattern.matches("cart"));
    ///
    /// assert!(Pattern::parse("c.t").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, PatternError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PatternError::Empty);
        }

        let slots = trimmed
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch.to_ascii_lowercase() {
                WILDCARD => Ok(None),
                lower if lower.is_ascii_lowercase() => Ok(Some(lower as u8)),
                _ => Err(PatternError::InvalidCharacter { ch, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }

    /// Word length this pattern accepts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a parsed pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of `?` positions
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Check a lowercase word against the pattern
    ///
    /// Lengths must be equal and every fixed position must hold the same letter.
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        bytes.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(bytes)
                .all(|(slot, &byte)| slot.is_none_or(|letter| letter == byte))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", char::from(*letter))?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_and_trims() {
        let pattern = Pattern::parse("  Ca?  ").unwrap();
        assert_eq!(pattern.to_string(), "ca?");
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.wildcard_count(), 1);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("   "), Err(PatternError::Empty));
    }

    #[test]
    fn parse_rejects_other_characters() {
        assert_eq!(
            Pattern::parse("c*t"),
            Err(PatternError::InvalidCharacter {
                ch: '*',
                position: 1
            })
        );
        assert!(Pattern::parse("c t").is_err());
        assert!(Pattern::parse("c_t").is_err());
        assert!(Pattern::parse("cé").is_err());
    }

    #[test]
    fn matches_fixed_positions() {
        let pattern = Pattern::parse("c?t").unwrap();
        assert!(pattern.matches("cat"));
        assert!(pattern.matches("cot"));
        assert!(pattern.matches("cut"));
        assert!(!pattern.matches("bat"));
        assert!(!pattern.matches("cab"));
    }

    #[test]
    fn matches_requires_equal_length() {
        let pattern = Pattern::parse("?at").unwrap();
        assert!(!pattern.matches("at"));
        assert!(!pattern.matches("cats"));
        assert!(!pattern.matches(""));
    }

    #[test]
    fn all_wildcards_match_any_word_of_that_length() {
        let pattern = Pattern::parse("????").unwrap();
        assert_eq!(pattern.wildcard_count(), 4);
        assert!(pattern.matches("lamp"));
        assert!(pattern.matches("zzzz"));
        assert!(!pattern.matches("lamps"));
    }

    #[test]
    fn from_str_round_trips_display() {
        let pattern: Pattern = "?r?ne".parse().unwrap();
        assert_eq!(pattern.to_string(), "?r?ne");
        assert!(pattern.matches("crane"));
    }
}
