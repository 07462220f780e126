//! The game engine façade
//!
//! [`Game`] owns the current [`Round`], the stats for its word length and the
//! storage adapter. Front-ends feed it key events with a timestamp and read
//! back board, keyboard colors, stats and the toast message.

use super::board::Board;
use super::keys::{Key, KeyColorMap};
use super::round::{Round, SubmitOutcome, ValidationError};
use super::timer::{TickEvents, Timers, Timing};
use super::{GameError, Mode, RoundConfig, share};
use crate::core::Word;
use crate::daily;
use crate::stats::{self, GameStats};
use crate::storage::{Storage, StorageKey};
use crate::wordlists::WordLists;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Schema version of [`SavedRound`]
pub const SAVED_ROUND_VERSION: u32 = 1;

/// Persisted progress of a daily round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRound {
    pub version: u32,
    pub guesses: Vec<String>,
    pub is_over: bool,
    pub is_won: bool,
}

impl SavedRound {
    fn from_round(round: &Round) -> Self {
        Self {
            version: SAVED_ROUND_VERSION,
            guesses: round.guesses(),
            is_over: round.is_over(),
            is_won: round.is_won(),
        }
    }
}

/// Result record handed to sync collaborators once a round ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub word_length: usize,
    pub mode: Mode,
    pub target: String,
    pub attempts: usize,
    pub won: bool,
    pub board: Board,
}

impl RoundOutcome {
    fn from_round(round: &Round) -> Self {
        let config = round.config();
        Self {
            word_length: config.word_length,
            mode: config.mode,
            target: round.target().text().to_string(),
            attempts: round.current_row_index(),
            won: round.is_won(),
            board: round.board(),
        }
    }
}

/// Construction options for [`Game`]
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    pub timing: Timing,
    /// Seed for practice word sampling; random when `None`
    pub seed: Option<u64>,
}

/// One player's session over a word source and a storage adapter
pub struct Game<'a, S: Storage> {
    words: &'a WordLists,
    storage: S,
    timing: Timing,
    today: NaiveDate,
    rng: StdRng,
    round: Round,
    stats: GameStats,
    stats_recorded: bool,
    timers: Timers,
    stats_open: bool,
    outcome: Option<RoundOutcome>,
}

impl<'a, S: Storage> Game<'a, S> {
    /// Start a session with default timing
    ///
    /// # Errors
    /// Returns an error if the config's word length has no target words.
    pub fn new(
        words: &'a WordLists,
        storage: S,
        config: RoundConfig,
        today: NaiveDate,
    ) -> Result<Self, GameError> {
        Self::with_options(words, storage, config, today, GameOptions::default())
    }

    /// Start a session with explicit timing and sampling seed
    ///
    /// # Errors
    /// Returns an error if the config's word length has no target words.
    pub fn with_options(
        words: &'a WordLists,
        storage: S,
        config: RoundConfig,
        today: NaiveDate,
        options: GameOptions,
    ) -> Result<Self, GameError> {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let target = pick_target(words, config, today, &mut rng)?;

        let mut game = Self {
            words,
            storage,
            timing: options.timing,
            today,
            rng,
            round: Round::new(config, target),
            stats: GameStats::default(),
            stats_recorded: false,
            timers: Timers::default(),
            stats_open: false,
            outcome: None,
        };
        game.prepare_round();
        Ok(game)
    }

    /// Begin a fresh round, discarding pending timers
    ///
    /// Daily rounds resume from saved progress when a record for today exists.
    ///
    /// # Errors
    /// Returns an error if the config's word length has no target words. The
    /// current round is kept in that case.
    pub fn start_round(&mut self, config: RoundConfig) -> Result<(), GameError> {
        let target = pick_target(self.words, config, self.today, &mut self.rng)?;
        self.round = Round::new(config, target);
        self.prepare_round();
        Ok(())
    }

    fn prepare_round(&mut self) {
        let config = self.round.config();
        self.timers.clear();
        self.stats_open = false;
        self.stats_recorded = false;
        self.outcome = None;
        self.stats = stats::load(&self.storage, config.word_length, self.day_number());

        if config.mode == Mode::Daily {
            self.resume_daily();
        }

        info!(
            word_length = config.word_length,
            mode = %config.mode,
            day = self.day_number(),
            attempts = self.round.current_row_index(),
            "round started"
        );
    }

    fn resume_daily(&mut self) {
        let config = self.round.config();
        let key = self.round_key();

        let saved = match self.storage.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<SavedRound>(&raw) {
                Ok(saved) if saved.version == SAVED_ROUND_VERSION => saved,
                Ok(saved) => {
                    warn!(%key, version = saved.version, "ignoring saved round with unknown version");
                    return;
                }
                Err(err) => {
                    warn!(%key, %err, "discarding malformed saved round");
                    return;
                }
            },
            Ok(None) => return,
            Err(err) => {
                warn!(%key, %err, "could not read saved round, starting fresh");
                return;
            }
        };

        let target = self.round.target().clone();
        match Round::replay(config, target, &saved.guesses) {
            Some(round) if round.is_over() == saved.is_over && round.is_won() == saved.is_won => {
                debug!(%key, guesses = saved.guesses.len(), "resumed daily round");
                if round.is_over() {
                    self.stats_recorded = true;
                    self.outcome = Some(RoundOutcome::from_round(&round));
                }
                self.round = round;
            }
            _ => warn!(%key, "saved round does not match today's word, discarding"),
        }
    }

    /// Apply one logical key; returns whether anything changed
    pub fn press(&mut self, key: Key, now: Instant) -> bool {
        match key {
            Key::Letter(ch) => self.type_letter(ch),
            Key::Backspace => self.backspace(),
            Key::Enter => self.submit(now).is_ok(),
        }
    }

    pub fn type_letter(&mut self, ch: char) -> bool {
        self.round.type_letter(ch)
    }

    pub fn backspace(&mut self) -> bool {
        self.round.backspace()
    }

    pub fn select_tile(&mut self, column: usize) -> bool {
        self.round.select_tile(column)
    }

    /// Submit the input row
    ///
    /// Win and loss take effect immediately. Only the reveal flag and the
    /// stats popup are deferred to [`Game::tick`].
    ///
    /// # Errors
    /// Returns the validation error, which is also shown as a toast. A
    /// submit on a finished round fails silently with `RoundOver`.
    pub fn submit(&mut self, now: Instant) -> Result<SubmitOutcome, ValidationError> {
        let outcome = match self.round.submit(self.words) {
            Ok(outcome) => outcome,
            Err(ValidationError::RoundOver) => return Err(ValidationError::RoundOver),
            Err(err) => {
                debug!(%err, "submission rejected");
                self.timers.show_toast(err.to_string(), now + self.timing.toast);
                return Err(err);
            }
        };

        let word_length = self.round.config().word_length;
        self.timers
            .start_reveal(outcome.row, now + self.timing.reveal_duration(word_length));

        if outcome.status.is_over() {
            self.finish_round(now);
        }
        self.save_round();

        Ok(outcome)
    }

    fn finish_round(&mut self, now: Instant) {
        let config = self.round.config();

        if config.mode == Mode::Daily && !self.stats_recorded {
            self.stats_recorded = true;
            self.stats = std::mem::take(&mut self.stats).record_result(
                self.round.is_won(),
                self.round.current_row_index(),
                self.day_number(),
            );
            stats::save(&mut self.storage, config.word_length, &self.stats);
        }

        let outcome = RoundOutcome::from_round(&self.round);
        info!(
            word_length = outcome.word_length,
            mode = %outcome.mode,
            won = outcome.won,
            attempts = outcome.attempts,
            "round finished"
        );
        self.outcome = Some(outcome);
        self.timers
            .schedule_stats(now + self.timing.stats_delay(config.word_length));
    }

    fn save_round(&mut self) {
        if self.round.config().mode != Mode::Daily {
            return;
        }

        let key = self.round_key();
        let saved = SavedRound::from_round(&self.round);
        let result = serde_json::to_string(&saved)
            .map_err(|err| err.to_string())
            .and_then(|raw| self.storage.write(&key, &raw).map_err(|err| err.to_string()));
        if let Err(err) = result {
            warn!(%key, %err, "failed to save round progress");
        }
    }

    fn round_key(&self) -> String {
        let config = self.round.config();
        StorageKey::Round {
            word_length: config.word_length,
            mode: config.mode,
            day: self.day_number(),
        }
        .to_string()
    }

    /// Fire expired deadlines
    pub fn tick(&mut self, now: Instant) -> TickEvents {
        let events = self.timers.tick(now);
        if events.show_stats {
            self.stats_open = true;
        }
        events
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.round.board()
    }

    #[must_use]
    pub fn key_colors(&self) -> KeyColorMap {
        self.round.key_colors()
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn config(&self) -> RoundConfig {
        self.round.config()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Live toast message, if any
    #[must_use]
    pub fn toast(&self) -> Option<&str> {
        self.timers.toast()
    }

    /// Row whose reveal animation is still running
    #[must_use]
    pub fn revealing_row(&self) -> Option<usize> {
        self.timers.revealing_row()
    }

    /// Whether the stats popup is open
    #[must_use]
    pub fn show_stats(&self) -> bool {
        self.stats_open
    }

    pub fn open_stats(&mut self) {
        self.stats_open = true;
    }

    pub fn dismiss_stats(&mut self) {
        self.stats_open = false;
    }

    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        share::share_text(&self.round, self.day_number())
    }

    /// Result record of the finished round
    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub fn day_number(&self) -> i64 {
        daily::day_number(self.today)
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage adapter
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn pick_target(
    words: &WordLists,
    config: RoundConfig,
    today: NaiveDate,
    rng: &mut StdRng,
) -> Result<Word, GameError> {
    let config = RoundConfig::new(config.word_length, config.mode)?;
    let answers = words.answers(config.word_length);

    let target = match config.mode {
        Mode::Daily => daily::daily_word(answers, config.word_length, today),
        Mode::Practice => answers.choose(rng),
    };
    target
        .cloned()
        .ok_or(GameError::EmptyPool(config.word_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict;
    use crate::storage::MemoryStorage;
    use crate::storage::testing::BrokenStorage;
    use crate::wordlists::loader::words_from_slice;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tracing_test::traced_test;

    const ANSWERS: &[&str] = &["PRATO"];
    const EXTRA: &[&str] = &["FESTA", "TERMO", "LIVRO", "CARRO", "PORTA", "NOITE", "PRAIA"];

    fn words() -> WordLists {
        let mut words = WordLists::default();
        words.insert(5, words_from_slice(ANSWERS), words_from_slice(EXTRA));
        words
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    fn game<S: Storage>(words: &WordLists, storage: S, mode: Mode) -> Game<'_, S> {
        let options = GameOptions {
            timing: Timing::default(),
            seed: Some(7),
        };
        Game::with_options(words, storage, RoundConfig::new(5, mode).unwrap(), today(), options)
            .unwrap()
    }

    fn guess<S: Storage>(game: &mut Game<'_, S>, word: &str, now: Instant) -> Result<SubmitOutcome, ValidationError> {
        for ch in word.chars() {
            game.type_letter(ch);
        }
        game.submit(now)
    }

    #[test]
    fn win_records_stats_once() {
        let words = words();
        let mut game = game(&words, MemoryStorage::new(), Mode::Daily);
        let now = Instant::now();

        guess(&mut game, "FESTA", now).unwrap();
        let outcome = guess(&mut game, "PRATO", now).unwrap();
        assert!(outcome.status.is_over());

        let stats = game.stats().clone();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.win_distribution[1], 1);
        assert_eq!(stats.current_streak, 1);

        // Further input on the finished round changes nothing
        assert_eq!(guess(&mut game, "PRATO", now), Err(ValidationError::RoundOver));
        assert_eq!(game.stats(), &stats);
        assert_eq!(game.toast(), None);
    }

    #[test]
    fn validation_errors_become_toasts() {
        let words = words();
        let mut game = game(&words, MemoryStorage::new(), Mode::Daily);
        let now = Instant::now();

        assert!(guess(&mut game, "PRA", now).is_err());
        assert_eq!(game.toast(), Some("A palavra deve ter 5 letras"));

        game.tick(now + Duration::from_millis(2000));
        assert_eq!(game.toast(), None);

        for _ in 0..3 {
            game.backspace();
        }
        assert_eq!(guess(&mut game, "ZZZZZ", now), Err(ValidationError::UnknownWord));
        assert_eq!(game.toast(), Some("Palavra não encontrada"));
        assert_eq!(game.round().current_row_index(), 0);
    }

    #[test]
    fn reveal_and_stats_popup_are_deferred() {
        let words = words();
        let mut game = game(&words, MemoryStorage::new(), Mode::Daily);
        let now = Instant::now();

        guess(&mut game, "PRATO", now).unwrap();
        // State already terminal, popup not yet open
        assert!(game.round().is_won());
        assert_eq!(game.revealing_row(), Some(0));
        assert!(!game.show_stats());

        let events = game.tick(now + Duration::from_millis(1700));
        assert_eq!(events.reveal_finished, Some(0));
        assert!(!events.show_stats);

        let events = game.tick(now + Duration::from_millis(2000));
        assert!(events.show_stats);
        assert!(game.show_stats());

        game.dismiss_stats();
        assert!(!game.show_stats());
    }

    #[test]
    fn practice_never_touches_stats_or_storage() {
        let words = words();
        let mut game = game(&words, MemoryStorage::new(), Mode::Practice);
        let now = Instant::now();

        guess(&mut game, "PRATO", now).unwrap();
        assert!(game.round().is_won());
        assert_eq!(game.stats(), &GameStats::default());
        assert_eq!(game.share_text(), None);
        assert!(game.outcome().is_some());
        assert!(game.storage().is_empty());
    }

    #[test]
    fn outcome_record_describes_round() {
        let words = words();
        let mut game = game(&words, MemoryStorage::new(), Mode::Daily);
        assert!(game.outcome().is_none());
        for word in ["TERMO", "LIVRO", "CARRO", "PORTA", "NOITE", "PRAIA"] {
            guess(&mut game, word, Instant::now()).unwrap();
        }

        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.target, "PRATO");
        assert_eq!(outcome.attempts, 6);
        assert!(!outcome.won);
        assert_eq!(outcome.mode, Mode::Daily);
        assert_eq!(outcome.board.evaluated_rows().count(), 6);
        assert_eq!(game.stats().current_streak, 0);
        assert_eq!(game.stats().games_won, 0);
    }

    #[test]
    fn daily_round_resumes_from_storage() {
        let words = words();
        let mut first = game(&words, MemoryStorage::new(), Mode::Daily);
        guess(&mut first, "FESTA", Instant::now()).unwrap();
        let storage = first.into_storage();

        let resumed = game(&words, storage, Mode::Daily);
        assert_eq!(resumed.round().current_row_index(), 1);
        assert_eq!(resumed.board().row(0)[3].verdict, LetterVerdict::Correct);
        assert!(resumed.outcome().is_none());
    }

    #[test]
    fn finished_daily_round_is_not_recorded_twice() {
        let words = words();
        let mut first = game(&words, MemoryStorage::new(), Mode::Daily);
        guess(&mut first, "PRATO", Instant::now()).unwrap();
        let storage = first.into_storage();

        let mut resumed = game(&words, storage, Mode::Daily);
        assert!(resumed.round().is_won());
        assert!(resumed.outcome().is_some());
        assert_eq!(guess(&mut resumed, "PRATO", Instant::now()), Err(ValidationError::RoundOver));
        assert_eq!(resumed.stats().games_played, 1);
    }

    #[test]
    #[traced_test]
    fn inconsistent_saved_round_is_discarded() {
        let words = words();
        let mut storage = MemoryStorage::new();
        let key = StorageKey::Round {
            word_length: 5,
            mode: Mode::Daily,
            day: daily::day_number(today()),
        }
        .to_string();
        let saved = SavedRound {
            version: SAVED_ROUND_VERSION,
            guesses: vec!["FESTA".into()],
            is_over: true,
            is_won: true,
        };
        storage.write(&key, &serde_json::to_string(&saved).unwrap()).unwrap();

        let game = game(&words, storage, Mode::Daily);
        assert_eq!(game.round().current_row_index(), 0);
        assert!(logs_contain("does not match today's word"));
    }

    #[test]
    #[traced_test]
    fn broken_storage_does_not_stop_play() {
        let words = words();
        let mut game = game(&words, BrokenStorage::default(), Mode::Daily);
        guess(&mut game, "PRATO", Instant::now()).unwrap();

        assert!(game.round().is_won());
        assert_eq!(game.stats().games_won, 1);
        assert!(game.share_text().is_some());
        assert!(logs_contain("failed to save stats"));
        assert!(logs_contain("failed to save round progress"));
    }

    #[test]
    fn start_round_switches_length_and_clears_timers() {
        let words = WordLists::embedded();
        let mut game = game(&words, MemoryStorage::new(), Mode::Practice);
        game.type_letter('A');
        game.submit(Instant::now()).unwrap_err();
        assert!(game.toast().is_some());

        game.start_round(RoundConfig::new(7, Mode::Practice).unwrap())
            .unwrap();
        assert_eq!(game.config().word_length, 7);
        assert_eq!(game.board().row(0).len(), 7);
        assert_eq!(game.toast(), None);
        assert_eq!(game.revealing_row(), None);
    }

    #[test]
    fn start_round_rejects_empty_pool() {
        let words = words();
        let mut game = game(&words, MemoryStorage::new(), Mode::Daily);
        let config = RoundConfig::new(6, Mode::Daily).unwrap();
        assert_eq!(game.start_round(config), Err(GameError::EmptyPool(6)));
        assert_eq!(game.config().word_length, 5);
    }

    #[test]
    fn press_routes_keys() {
        let words = words();
        let mut game = game(&words, MemoryStorage::new(), Mode::Daily);
        let now = Instant::now();
        for name in ["p", "r", "a", "t", "x", "BACKSPACE", "o"] {
            game.press(Key::parse(name).unwrap(), now);
        }
        assert!(game.press(Key::Enter, now));
        assert!(game.round().is_won());
    }

    #[test]
    fn seeded_practice_is_reproducible() {
        let words = WordLists::embedded();
        let a = game(&words, MemoryStorage::new(), Mode::Practice);
        let b = game(&words, MemoryStorage::new(), Mode::Practice);
        assert_eq!(a.round().target(), b.round().target());
    }
}
