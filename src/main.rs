//! Letreco - CLI
//!
//! Daily word puzzle with TUI and line modes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use letreco::{
    commands::{collect_stats, daily_report, print_daily_report, run_simple},
    daily,
    game::{Game, GameOptions, Mode, RoundConfig},
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::print_stats,
    settings::Settings,
    storage::{FileStorage, MemoryStorage, Storage},
    wordlists::{WordLists, loader::load_from_dir},
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "letreco",
    about = "Daily Portuguese word puzzle, 4 to 7 letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length, 4 to 7 (default from config, else 5)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Play a random word instead of the word of the day
    #[arg(short, long, global = true)]
    practice: bool,

    /// Directory for stats and saved rounds
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log filter, e.g. 'letreco=debug' (RUST_LOG wins when set)
    #[arg(long, global = true)]
    log: Option<String>,

    /// Directory with {len}/answers.txt and {len}/allowed.txt
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: one guess per line, no TUI
    Simple,

    /// Show the day number and word of the day
    Daily {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Print the word itself
        #[arg(short, long)]
        reveal: bool,
    },

    /// Show stats for every word length
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("failed to load settings")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| settings.data_dir.clone())
        .or_else(FileStorage::default_dir)
        .context("could not determine a data directory, pass --data-dir")?;

    let storage = FileStorage::open(&data_dir);

    let log_target = match (&command, &storage) {
        (Commands::Play, Ok(_)) => LogTarget::File(data_dir.join("letreco.log")),
        _ => LogTarget::Stderr,
    };
    init_tracing(cli.log.as_deref(), &log_target);

    let words = match &cli.words {
        Some(dir) => load_from_dir(dir)
            .with_context(|| format!("failed to load word lists from {}", dir.display()))?,
        None => WordLists::embedded(),
    };

    let mut config = settings.round_config()?;
    if let Some(length) = cli.length {
        config = RoundConfig::new(length, config.mode)?;
    }
    if cli.practice {
        config.mode = Mode::Practice;
    }
    let today = Local::now().date_naive();

    info!(
        data_dir = %data_dir.display(),
        mode = %config.mode,
        length = config.word_length,
        "starting"
    );

    match storage {
        Ok(storage) => run_command(command, storage, &words, config, today, &settings),
        Err(err) => {
            warn!(%err, "data directory unavailable, progress will not be saved");
            run_command(command, MemoryStorage::new(), &words, config, today, &settings)
        }
    }
}

fn run_command<S: Storage>(
    command: Commands,
    storage: S,
    words: &WordLists,
    config: RoundConfig,
    today: NaiveDate,
    settings: &Settings,
) -> Result<()> {
    match command {
        Commands::Play => {
            let game = new_game(words, storage, config, today, settings)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = new_game(words, storage, config, today, settings)?;
            run_simple(&mut game)?;
            Ok(())
        }
        Commands::Daily { date, reveal } => {
            let date = date.unwrap_or(today);
            let report = daily_report(words, config.word_length, date).with_context(|| {
                format!("no target words for length {}", config.word_length)
            })?;
            print_daily_report(&report, reveal);
            Ok(())
        }
        Commands::Stats => {
            for (length, stats) in collect_stats(&storage, daily::day_number(today)) {
                print_stats(&stats, length, None);
            }
            Ok(())
        }
    }
}

fn new_game<'a, S: Storage>(
    words: &'a WordLists,
    storage: S,
    config: RoundConfig,
    today: NaiveDate,
    settings: &Settings,
) -> Result<Game<'a, S>> {
    let options = GameOptions {
        timing: settings.timing(),
        seed: None,
    };
    Ok(Game::with_options(words, storage, config, today, options)?)
}
