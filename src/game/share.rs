//! Spoiler-free result text

use super::{Mode, Round};
use crate::core::MAX_ATTEMPTS;

/// Build the share text for a finished daily round
///
/// ```text
/// Letreco 657 (5 letras) 3/6
///
/// ⬛⬛⬛🟩🟨
/// 🟨⬛⬛⬛🟩
/// 🟩🟩🟩🟩🟩
/// ```
///
/// A lost round shows `X/6`. Returns `None` for practice rounds and rounds
/// still in progress.
#[must_use]
pub fn share_text(round: &Round, day: i64) -> Option<String> {
    let config = round.config();
    if config.mode != Mode::Daily || !round.is_over() {
        return None;
    }

    let score = if round.is_won() {
        round.current_row_index().to_string()
    } else {
        "X".to_string()
    };

    let grid = round
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| tile.verdict.to_emoji())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "Letreco {day} ({} letras) {score}/{MAX_ATTEMPTS}\n\n{grid}",
        config.word_length
    ))
}
