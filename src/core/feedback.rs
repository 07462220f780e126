//! Guess evaluation and per-letter verdicts
//!
//! Feedback follows the classic rules:
//! - `Correct`: letter in the right position
//! - `Present`: letter in the target, wrong position
//! - `Absent`: letter not in the target, or all its occurrences already credited
//!
//! `Empty` and `Pending` only describe tiles on the board that have not been
//! evaluated yet; the evaluator never produces them.

use super::Word;
use super::normalize::normalize_char;
use super::word::count_letters;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterVerdict {
    Correct,
    Present,
    Absent,
    Empty,
    Pending,
}

impl LetterVerdict {
    /// Rank used when merging verdicts for the keyboard
    ///
    /// `Correct` beats `Present` beats `Absent`; unevaluated states rank lowest.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Pending => 0,
        }
    }

    /// True for the three states an evaluated tile can hold
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }

    /// Share-grid glyph
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Empty | Self::Pending => '⬛',
        }
    }
}

/// Verdicts for one evaluated guess, one per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters while the pool lasts
    ///
    /// # Panics
    /// Panics if the words differ in length. The round guarantees equal
    /// lengths, so a mismatch is a programming error.
    ///
    /// # Examples
    /// ```
    /// use letreco::core::{Feedback, LetterVerdict, Word};
    ///
    /// let guess = Word::new("festa").unwrap();
    /// let answer = Word::new("prato").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.verdicts()[3], LetterVerdict::Correct);
    /// assert_eq!(feedback.verdicts()[4], LetterVerdict::Present);
    /// assert_eq!(feedback.count_correct(), 1);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        Self::from_letters(guess.letters(), answer.letters(), answer.letter_counts())
    }

    /// Two passes over the guess, crediting from `available`
    fn from_letters(guess: &[char], answer: &[char], mut available: FxHashMap<char, u8>) -> Self {
        assert_eq!(
            guess.len(),
            answer.len(),
            "guess and answer must have the same length"
        );

        let mut result = vec![LetterVerdict::Absent; guess.len()];
        // First pass: exact positions
        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                result[i] = LetterVerdict::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: displaced letters, while unclaimed occurrences remain
        for (i, &g) in guess.iter().enumerate() {
            if result[i] == LetterVerdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Verdicts in letter order
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Count the number of correct tiles
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&v| v == LetterVerdict::Correct)
            .count()
    }

    /// Count the number of present tiles
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&v| v == LetterVerdict::Present)
            .count()
    }

    /// Convert to an emoji string like "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl From<Feedback> for Vec<LetterVerdict> {
    fn from(feedback: Feedback) -> Self {
        feedback.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Evaluate a raw guess against a raw target
///
/// Both strings are normalized first, so accents and case never matter.
///
/// # Panics
/// Panics if the two strings have different letter counts.
#[must_use]
pub fn evaluate(guess: &str, target: &str) -> Feedback {
    let guess: Vec<char> = guess.chars().map(normalize_char).collect();
    let target: Vec<char> = target.chars().map(normalize_char).collect();
    Feedback::from_letters(&guess, &target, count_letters(&target))
}
