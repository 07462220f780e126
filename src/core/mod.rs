//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types: letter normalization,
//! validated words and guess evaluation. Everything here is pure.

mod feedback;
mod normalize;
mod word;

pub use feedback::{Feedback, LetterVerdict, evaluate};
pub use normalize::{display_char, normalize, normalize_char};
pub use word::{Word, WordError};

/// Shortest supported word length
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest supported word length
pub const MAX_WORD_LENGTH: usize = 7;

/// Rows on the board, and guesses per round
pub const MAX_ATTEMPTS: usize = 6;
