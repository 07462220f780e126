//! Formatting utilities for terminal output

use crate::core::LetterVerdict;
use crate::game::Tile;
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One tile as a colored block, e.g. ` A ` on green
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter.unwrap_or('·'));
    match tile.verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::Present => text.black().on_yellow().bold(),
        LetterVerdict::Absent => text.white().on_bright_black(),
        LetterVerdict::Pending => text.bright_white().bold(),
        LetterVerdict::Empty => text.bright_black(),
    }
}

/// A whole row of colored tiles
#[must_use]
pub fn format_row(row: &[Tile]) -> String {
    row.iter().map(|&tile| colored_tile(tile).to_string()).collect()
}

/// Emoji string for a row of tiles, unevaluated tiles as blanks
#[must_use]
pub fn row_to_emoji(row: &[Tile]) -> String {
    row.iter()
        .map(|tile| {
            if tile.verdict.is_evaluated() {
                tile.verdict.to_emoji()
            } else {
                '⬜'
            }
        })
        .collect()
}
