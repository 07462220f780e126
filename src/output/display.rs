//! Display functions for command results

use super::formatters::{create_progress_bar, format_row, row_to_emoji};
use crate::core::{LetterVerdict, MAX_ATTEMPTS};
use crate::game::{Board, KEYBOARD_ROWS, KeyColorMap, Round};
use crate::stats::GameStats;
use colored::Colorize;

/// Print the board rows that hold letters
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        if row.iter().all(|tile| tile.letter.is_none()) {
            continue;
        }
        println!("   {}", format_row(row));
    }
    println!();
}

/// Print the keyboard with each key colored by its best verdict
pub fn print_keyboard(colors: &KeyColorMap) {
    for (i, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let line: Vec<String> = keys
            .chars()
            .map(|key| {
                let label = key.to_string();
                match colors.get(key) {
                    Some(LetterVerdict::Correct) => label.green().bold().to_string(),
                    Some(LetterVerdict::Present) => label.yellow().bold().to_string(),
                    Some(LetterVerdict::Absent) => label.bright_black().to_string(),
                    _ => label.bright_white().to_string(),
                }
            })
            .collect();
        println!("   {}{}", " ".repeat(i), line.join(" "));
    }
}

/// Print counters, streaks and the win distribution
///
/// `highlight` marks the distribution bucket of the round just won.
pub fn print_stats(stats: &GameStats, word_length: usize, highlight: Option<usize>) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} ",
        format!("ESTATÍSTICAS ({word_length} letras)").bright_cyan().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Jogos:           {}", stats.games_played.to_string().bold());
    println!(
        "   Vitórias:        {}",
        format!("{}%", stats.win_percentage()).bright_yellow().bold()
    );
    println!("   Sequência atual: {}", stats.current_streak.to_string().green());
    println!("   Melhor sequência: {}", stats.max_streak.to_string().green());

    println!("\n📈 {}", "Distribuição:".bright_cyan().bold());
    let max = stats.win_distribution.iter().copied().max().unwrap_or(0);
    for attempt in 1..=MAX_ATTEMPTS {
        let count = stats.win_distribution[attempt - 1];
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        let bar = if highlight == Some(attempt) {
            bar.green().bold()
        } else {
            bar.bright_black()
        };
        println!("   {attempt}: {bar} {count:4}");
    }
    println!();
}

/// Print the end-of-round banner with the revealed word
pub fn print_round_end(round: &Round) {
    let Some(target) = round.revealed_target() else {
        return;
    };

    println!("{}", "─".repeat(50).cyan());
    if round.is_won() {
        let attempts = round.current_row_index();
        println!(
            "{}",
            format!(
                "🎉 Acertou em {attempts} {}!",
                if attempts == 1 { "tentativa" } else { "tentativas" }
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", "❌ Não foi desta vez.".red().bold());
    }
    println!("   A palavra era {}", target.text().bright_yellow().bold());
    for (i, row) in round.rows().iter().enumerate() {
        println!("   {}. {}", (i + 1).to_string().bright_black(), row_to_emoji(row));
    }
    println!("{}", "─".repeat(50).cyan());
}
