//! Word filtering module
//!
//! Length window, character pattern and the length-based tier policy.

use regex::Regex;
use std::ops::RangeInclusive;

/// Shortest and longest word a dictionary entry may have
pub const WORD_LENGTHS: RangeInclusive<usize> = 4..=12;

/// Maps a word length to a difficulty tier
pub type TierFn = fn(usize) -> u8;

/// Difficulty tier for a word of `length` letters
///
/// Short words are easy, long words are hard. Lengths above 12 never reach
/// this point because the length filter drops them first.
pub fn tier_for_length(length: usize) -> u8 {
    match length {
        0..=6 => 1,
        7..=8 => 2,
        _ => 3,
    }
}

/// Filter configuration
#[derive(Debug, Clone)]
pub struct WordFilter {
    lengths: RangeInclusive<usize>,
    pattern: Regex,
}

impl WordFilter {
    /// Create a filter for the given length window and pattern
    pub fn new(lengths: RangeInclusive<usize>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            lengths,
            pattern: Regex::new(pattern)?,
        })
    }

    /// The dictionary filter: 4-12 lowercase ASCII letters
    pub fn standard() -> Result<Self, regex::Error> {
        Self::new(WORD_LENGTHS, patterns::LOWERCASE_ONLY)
    }

    #[inline]
    pub fn matches_length(&self, word: &str) -> bool {
        let len = if word.is_ascii() {
            word.len()
        } else {
            word.chars().count()
        };
        self.lengths.contains(&len)
    }

    #[inline]
    pub fn matches_pattern(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    pub fn lengths(&self) -> &RangeInclusive<usize> {
        &self.lengths
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Regex patterns used for dictionary words
pub mod patterns {
    /// Only lowercase letters
    pub const LOWERCASE_ONLY: &str = r"^[a-z]+$";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for_length(4), 1);
        assert_eq!(tier_for_length(6), 1);
        assert_eq!(tier_for_length(7), 2);
        assert_eq!(tier_for_length(8), 2);
        assert_eq!(tier_for_length(9), 3);
        assert_eq!(tier_for_length(12), 3);
    }

    #[test]
    fn test_length_boundaries() {
        let filter = WordFilter::standard().unwrap();

        assert!(!filter.matches_length("abc"));
        assert!(filter.matches_length("abcd"));
        assert!(filter.matches_length("abcdefghijkl"));
        assert!(!filter.matches_length("abcdefghijklm"));
    }

    #[test]
    fn test_unicode_length_counts_chars() {
        let filter = WordFilter::standard().unwrap();

        // 4 chars, 5 bytes
        assert!(filter.matches_length("café"));
    }

    #[test]
    fn test_pattern_rejects_non_letters() {
        let filter = WordFilter::standard().unwrap();

        assert!(filter.matches_pattern("grime"));
        assert!(!filter.matches_pattern("grime2"));
        assert!(!filter.matches_pattern("ice-cream"));
        assert!(!filter.matches_pattern("don't"));
        assert!(!filter.matches_pattern("Grime"));
        assert!(!filter.matches_pattern("café"));
        assert!(!filter.matches_pattern(""));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(WordFilter::new(1..=3, "([a-z]").is_err());
    }
}
