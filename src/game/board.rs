//! Tiles and the board grid

use crate::core::{LetterVerdict, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};

/// One cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: LetterVerdict,
}

impl Tile {
    pub const EMPTY: Self = Self {
        letter: None,
        verdict: LetterVerdict::Empty,
    };

    /// Typed but not yet submitted
    #[must_use]
    pub const fn pending(letter: char) -> Self {
        Self {
            letter: Some(letter),
            verdict: LetterVerdict::Pending,
        }
    }

    #[must_use]
    pub const fn evaluated(letter: char, verdict: LetterVerdict) -> Self {
        Self {
            letter: Some(letter),
            verdict,
        }
    }
}

/// Snapshot of the whole grid: always `MAX_ATTEMPTS` rows of `word_length` tiles
///
/// Rows before the current one are fully evaluated, the current row holds
/// pending input, and every row after it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    word_length: usize,
    rows: Vec<Vec<Tile>>,
}

impl Board {
    /// Assemble a board from completed rows and the optional input row
    pub(crate) fn assemble(
        word_length: usize,
        completed: &[Vec<Tile>],
        input: Option<Vec<Tile>>,
    ) -> Self {
        let mut rows: Vec<Vec<Tile>> = completed.to_vec();
        if let Some(row) = input
            && rows.len() < MAX_ATTEMPTS
        {
            rows.push(row);
        }
        rows.resize(MAX_ATTEMPTS, vec![Tile::EMPTY; word_length]);

        Self { word_length, rows }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Get one row; panics past `MAX_ATTEMPTS`
    #[must_use]
    pub fn row(&self, index: usize) -> &[Tile] {
        &self.rows[index]
    }

    /// Rows whose tiles are all evaluated
    pub fn evaluated_rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.rows
            .iter()
            .map(Vec::as_slice)
            .take_while(|row| row.iter().all(|tile| tile.verdict.is_evaluated()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Empty, Pending};

    #[test]
    fn empty_board_dimensions() {
        let board = Board::assemble(5, &[], None);
        assert_eq!(board.rows().len(), MAX_ATTEMPTS);
        assert!(board.rows().iter().all(|row| row.len() == 5));
        assert!(board.rows().iter().flatten().all(|t| *t == Tile::EMPTY));
        assert_eq!(board.evaluated_rows().count(), 0);
    }

    #[test]
    fn input_row_follows_completed_rows() {
        let done = vec![vec![Tile::evaluated('E', Absent); 4]];
        let input = vec![Tile::pending('R'), Tile::EMPTY, Tile::EMPTY, Tile::EMPTY];
        let board = Board::assemble(4, &done, Some(input));

        assert_eq!(board.row(0)[0].verdict, Absent);
        assert_eq!(board.row(1)[0].verdict, Pending);
        assert_eq!(board.row(1)[1].verdict, Empty);
        assert!(board.rows()[2..].iter().flatten().all(|t| *t == Tile::EMPTY));
        assert_eq!(board.evaluated_rows().count(), 1);
    }

    #[test]
    fn full_board_ignores_input_row() {
        let done = vec![vec![Tile::evaluated('A', Correct); 4]; MAX_ATTEMPTS];
        let board = Board::assemble(4, &done, Some(vec![Tile::pending('X'); 4]));
        assert_eq!(board.rows().len(), MAX_ATTEMPTS);
        assert_eq!(board.evaluated_rows().count(), MAX_ATTEMPTS);
    }
}
