//! Round state machine
//!
//! A round starts `InProgress` with an empty board and the cursor on the
//! first tile. Letter, backspace and submit events mutate it until a winning
//! submission (`Won`) or the sixth miss (`Lost`). Terminal rounds ignore
//! every further event.

use super::RoundConfig;
use super::board::{Board, Tile};
use super::keys::KeyColorMap;
use crate::core::{Feedback, MAX_ATTEMPTS, Word, display_char, evaluate, normalize};
use crate::wordlists::WordLists;
use thiserror::Error;
use tracing::debug;

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Rejected submissions; the text is the toast shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A palavra deve ter {word_length} letras")]
    Incomplete { word_length: usize },
    #[error("Palavra não encontrada")]
    UnknownWord,
    #[error("A rodada já terminou")]
    RoundOver,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Index of the row that was just evaluated
    pub row: usize,
    pub feedback: Feedback,
    pub status: RoundStatus,
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    target: Word,
    rows: Vec<Vec<Tile>>,
    input: Vec<Option<char>>,
    cursor: usize,
    status: RoundStatus,
}

impl Round {
    /// Start a fresh round against `target`
    ///
    /// # Panics
    /// Panics if the target length does not match the config.
    #[must_use]
    pub fn new(config: RoundConfig, target: Word) -> Self {
        assert_eq!(
            target.len(),
            config.word_length,
            "target length must match the round config"
        );

        Self {
            config,
            target,
            rows: Vec::with_capacity(MAX_ATTEMPTS),
            input: vec![None; config.word_length],
            cursor: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Rebuild a round by replaying earlier guesses
    ///
    /// Returns `None` if a guess has the wrong length or the guesses carry
    /// on past the end of the round.
    #[must_use]
    pub fn replay(config: RoundConfig, target: Word, guesses: &[String]) -> Option<Self> {
        let mut round = Self::new(config, target);
        for guess in guesses {
            let letters: Vec<char> = guess.chars().map(display_char).collect();
            if round.status.is_over() || letters.len() != config.word_length {
                return None;
            }
            round.apply_guess(&letters);
        }
        Some(round)
    }

    #[must_use]
    pub fn config(&self) -> RoundConfig {
        self.config
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    /// Next editable tile in the input row
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of completed rows
    #[must_use]
    pub fn current_row_index(&self) -> usize {
        self.rows.len()
    }

    /// The target, only once the round is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }

    pub(crate) fn target(&self) -> &Word {
        &self.target
    }

    /// Submitted guesses as typed, oldest first
    #[must_use]
    pub fn guesses(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().filter_map(|tile| tile.letter).collect())
            .collect()
    }

    /// Completed rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Type a letter at the cursor
    ///
    /// The cursor then moves to the next empty tile, searching forward and
    /// wrapping to the start. With no empty tile left it steps right,
    /// stopping on the last tile. Returns false when ignored.
    pub fn type_letter(&mut self, ch: char) -> bool {
        if self.is_over() || !ch.is_alphabetic() {
            return false;
        }

        self.input[self.cursor] = Some(display_char(ch));
        let last = self.config.word_length - 1;
        self.cursor = self
            .next_open_tile()
            .unwrap_or_else(|| (self.cursor + 1).min(last));
        true
    }

    fn next_open_tile(&self) -> Option<usize> {
        let len = self.config.word_length;
        (self.cursor + 1..len)
            .chain(0..self.cursor)
            .find(|&i| self.input[i].is_none())
    }

    /// Clear the tile under the cursor, or step back and clear that one
    ///
    /// Returns false when there was nothing to clear.
    pub fn backspace(&mut self) -> bool {
        if self.is_over() {
            return false;
        }

        if self.input[self.cursor].is_some() {
            self.input[self.cursor] = None;
            true
        } else if self.cursor > 0 {
            self.cursor -= 1;
            self.input[self.cursor] = None;
            true
        } else {
            false
        }
    }

    /// Move the cursor to any tile of the input row
    pub fn select_tile(&mut self, column: usize) -> bool {
        if self.is_over() || column >= self.config.word_length {
            return false;
        }
        self.cursor = column;
        true
    }

    /// Evaluate the input row
    ///
    /// # Errors
    /// - `Incomplete` if any tile is empty
    /// - `UnknownWord` if the word is not an accepted guess
    /// - `RoundOver` if the round already ended
    ///
    /// A rejected submission leaves the round untouched.
    pub fn submit(&mut self, words: &WordLists) -> Result<SubmitOutcome, ValidationError> {
        if self.is_over() {
            return Err(ValidationError::RoundOver);
        }

        let letters: Vec<char> = self
            .input
            .iter()
            .copied()
            .collect::<Option<Vec<char>>>()
            .ok_or(ValidationError::Incomplete {
                word_length: self.config.word_length,
            })?;

        let typed: String = letters.iter().collect();
        if !words.is_valid_guess(&normalize(&typed)) {
            return Err(ValidationError::UnknownWord);
        }

        let feedback = self.apply_guess(&letters);
        self.input = vec![None; self.config.word_length];
        self.cursor = 0;

        Ok(SubmitOutcome {
            row: self.rows.len() - 1,
            feedback,
            status: self.status,
        })
    }

    fn apply_guess(&mut self, letters: &[char]) -> Feedback {
        let typed: String = letters.iter().collect();
        let feedback = evaluate(&typed, self.target.text());

        let row = letters
            .iter()
            .zip(feedback.verdicts())
            .map(|(&letter, &verdict)| Tile::evaluated(letter, verdict))
            .collect();
        self.rows.push(row);

        if feedback.is_perfect() {
            self.status = RoundStatus::Won;
        } else if self.rows.len() >= MAX_ATTEMPTS {
            self.status = RoundStatus::Lost;
        }

        debug!(
            guess = %typed,
            attempt = self.rows.len(),
            feedback = %feedback,
            status = ?self.status,
            "guess evaluated"
        );

        feedback
    }

    /// Full 6-row snapshot including the input row
    #[must_use]
    pub fn board(&self) -> Board {
        let input = (!self.is_over()).then(|| {
            self.input
                .iter()
                .map(|slot| slot.map_or(Tile::EMPTY, Tile::pending))
                .collect()
        });
        Board::assemble(self.config.word_length, &self.rows, input)
    }

    /// Best verdict per letter across the evaluated rows
    #[must_use]
    pub fn key_colors(&self) -> KeyColorMap {
        KeyColorMap::from_tiles(
            self.rows
                .iter()
                .flatten()
                .filter_map(|tile| tile.letter.map(|letter| (letter, tile.verdict))),
        )
    }
}
