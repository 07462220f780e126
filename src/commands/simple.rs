//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::game::{Game, Mode, RoundConfig, ValidationError};
use crate::output::{print_board, print_keyboard, print_round_end, print_stats};
use crate::storage::Storage;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewPractice,
    Stats,
    Guess(String),
    Blank,
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Blank,
            ":q" | ":sair" | ":quit" => Self::Quit,
            ":novo" | ":new" => Self::NewPractice,
            ":stats" | ":estatisticas" => Self::Stats,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Type a whole word and submit it
///
/// # Errors
/// Returns the rejection; the input row is cleared either way.
pub fn submit_line<S: Storage>(game: &mut Game<'_, S>, word: &str) -> Result<(), ValidationError> {
    let word_length = game.config().word_length;
    if word.chars().count() != word_length {
        return Err(ValidationError::Incomplete { word_length });
    }

    for ch in word.chars() {
        game.type_letter(ch);
    }
    let result = game.submit(Instant::now()).map(|_| ());
    while game.backspace() {}
    result
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<S: Storage>(game: &mut Game<'_, S>) -> io::Result<()> {
    let config = game.config();
    println!("\n╔══════════════════════════════════════════════════════╗");
    println!("║                 Letreco - modo texto                 ║");
    println!("╚══════════════════════════════════════════════════════╝\n");
    println!(
        "Modo: {}, {} letras. Digite uma palavra por linha.",
        config.mode, config.word_length
    );
    println!("Comandos: ':novo' nova rodada de treino, ':stats', ':sair'\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.round().is_over() {
            print_round_end(game.round());
            if let Some(share) = game.share_text() {
                println!("\n{share}\n");
            }
            let won_at = game
                .round()
                .is_won()
                .then(|| game.round().current_row_index());
            print_stats(game.stats(), game.config().word_length, won_at);
            println!("Digite ':novo' para treinar ou ':sair'.");
        } else {
            print_board(&game.board());
            print_keyboard(&game.key_colors());
        }

        print!("\n> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match LineCommand::parse(&line) {
            LineCommand::Quit => return Ok(()),
            LineCommand::Blank => {}
            LineCommand::Stats => {
                print_stats(game.stats(), game.config().word_length, None);
            }
            LineCommand::NewPractice => {
                let config = RoundConfig {
                    mode: Mode::Practice,
                    ..game.config()
                };
                if let Err(err) = game.start_round(config) {
                    println!("{}", err.to_string().red());
                }
            }
            LineCommand::Guess(word) => match submit_line(game, &word) {
                Ok(()) | Err(ValidationError::RoundOver) => {}
                Err(err) => println!("{}", err.to_string().red().bold()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::wordlists::WordLists;
    use chrono::NaiveDate;

    #[test]
    fn parse_commands() {
        assert_eq!(LineCommand::parse("  "), LineCommand::Blank);
        assert_eq!(LineCommand::parse(":SAIR"), LineCommand::Quit);
        assert_eq!(LineCommand::parse(":novo"), LineCommand::NewPractice);
        assert_eq!(LineCommand::parse(" festa "), LineCommand::Guess("festa".into()));
    }

    #[test]
    fn submit_line_clears_rejected_input() {
        let words = WordLists::embedded();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut game = Game::new(&words, MemoryStorage::new(), RoundConfig::default(), today).unwrap();

        assert_eq!(
            submit_line(&mut game, "PRAIAS"),
            Err(ValidationError::Incomplete { word_length: 5 })
        );
        assert_eq!(submit_line(&mut game, "QQQQQ"), Err(ValidationError::UnknownWord));
        assert_eq!(game.round().cursor(), 0);
        assert!(game.board().row(0).iter().all(|t| t.letter.is_none()));

        submit_line(&mut game, "zebra").unwrap();
        assert_eq!(game.round().current_row_index(), 1);
        assert!(game.board().row(1).iter().all(|t| t.letter.is_none()));
    }
}
