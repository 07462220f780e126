//! Puzzle word representation
//!
//! A `Word` keeps two views of the same letters: the display text, uppercase
//! with its accents intact, and the normalized key used for every comparison.

use super::normalize::{display_char, normalize_char};
use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated puzzle word of 4 to 7 letters
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    key: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must have between 4 and 7 letters, got {0}")]
    InvalidLength(usize),
    #[error("word contains non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 4..=7 letters
    /// - Contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use letreco::core::Word;
    ///
    /// let word = Word::new("limão").unwrap();
    /// assert_eq!(word.text(), "LIMÃO");
    /// assert_eq!(word.key(), "LIMAO");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("pr4to").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();
        let length = text.chars().count();

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
            return Err(WordError::InvalidLength(length));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self {
            text: text.chars().map(display_char).collect(),
            key: text.chars().map(normalize_char).collect(),
        })
    }

    /// Display form, uppercase with accents
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized form used for comparisons
    #[must_use]
    pub fn key(&self) -> String {
        self.key.iter().collect()
    }

    /// Normalized letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.key
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Always false, words have at least four letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Get the count of each normalized letter in the word
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        count_letters(&self.key)
    }
}

/// Occurrences of each letter, the pool the evaluator credits from
pub(crate) fn count_letters(letters: &[char]) -> FxHashMap<char, u8> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("prato").unwrap();
        assert_eq!(word.text(), "PRATO");
        assert_eq!(word.key(), "PRATO");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_keeps_accents_for_display() {
        let word = Word::new("Braço").unwrap();
        assert_eq!(word.text(), "BRAÇO");
        assert_eq!(word.key(), "BRACO");
        assert_eq!(word.letters(), &['B', 'R', 'A', 'C', 'O']);
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // "ÁGUA" is 5 bytes in UTF-8 but 4 letters
        let word = Word::new("água").unwrap();
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("sol"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new("abacaxis"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("prat0"), Err(WordError::InvalidCharacter('0')));
        assert!(Word::new("pr to").is_err());
        assert!(Word::new("prat!").is_err());
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("carro").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'R'), Some(&2));
        assert_eq!(counts.get(&'C'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_equality_uses_normalized_key() {
        let plain = Word::new("limao").unwrap();
        let accented = Word::new("LIMÃO").unwrap();
        assert_eq!(plain, accented);
        assert_ne!(plain, Word::new("prato").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("café").unwrap();
        assert_eq!(format!("{word}"), "CAFÉ");
    }
}
