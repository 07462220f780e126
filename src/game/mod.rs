//! Round engine
//!
//! - `board`: tiles and the fixed 6-row grid
//! - `keys`: logical key events and the keyboard color map
//! - `round`: the per-round state machine
//! - `share`: spoiler-free result text
//! - `timer`: cosmetic deadlines (reveal animation, stats popup, toasts)
//! - `session`: [`Game`], which wires rounds to stats and storage

mod board;
mod keys;
mod round;
mod session;
mod share;
mod timer;

pub use board::{Board, Tile};
pub use keys::{KEYBOARD_ROWS, Key, KeyColorMap};
pub use round::{Round, RoundStatus, SubmitOutcome, ValidationError};
pub use session::{Game, GameOptions, RoundOutcome, SAVED_ROUND_VERSION, SavedRound};
pub use share::share_text;
pub use timer::{TickEvents, Timing};

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the target word is chosen
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One shared word per calendar day and length
    #[default]
    Daily,
    /// A random word per round; never touches stats
    Practice,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => f.write_str("daily"),
            Self::Practice => f.write_str("practice"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "practice" => Ok(Self::Practice),
            other => Err(format!("unknown mode '{other}', expected daily or practice")),
        }
    }
}

/// Errors starting a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unsupported word length {0}, expected 4 to 7")]
    UnsupportedLength(usize),
    #[error("no target words available for length {0}")]
    EmptyPool(usize),
}

/// Word length and mode for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundConfig {
    pub word_length: usize,
    pub mode: Mode,
}

impl RoundConfig {
    /// # Errors
    /// Returns `GameError::UnsupportedLength` outside 4..=7.
    pub fn new(word_length: usize, mode: Mode) -> Result<Self, GameError> {
        if (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word_length) {
            Ok(Self { word_length, mode })
        } else {
            Err(GameError::UnsupportedLength(word_length))
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            mode: Mode::Daily,
        }
    }
}
