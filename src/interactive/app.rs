//! TUI application state and event loop

use crate::game::{Game, Key, Mode, RoundConfig};
use crate::storage::Storage;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How often the loop wakes up to fire timers when no key arrives
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a, S: Storage> {
    pub game: Game<'a, S>,
    pub should_quit: bool,
}

impl<'a, S: Storage> App<'a, S> {
    #[must_use]
    pub fn new(game: Game<'a, S>) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    /// Route one terminal key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_practice_round(),
                KeyCode::Char('s') => self.toggle_stats(),
                _ => {}
            }
            return;
        }

        if self.game.show_stats() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.game.dismiss_stats();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                self.game.press(Key::Enter, now);
            }
            KeyCode::Backspace => {
                self.game.press(Key::Backspace, now);
            }
            KeyCode::Left => {
                let cursor = self.game.round().cursor();
                self.game.select_tile(cursor.saturating_sub(1));
            }
            KeyCode::Right => {
                let cursor = self.game.round().cursor();
                self.game.select_tile(cursor + 1);
            }
            KeyCode::Up => self.change_length(1),
            KeyCode::Down => self.change_length(-1),
            KeyCode::Tab => self.toggle_mode(),
            KeyCode::Char(ch) => {
                if let Some(key) = Key::from_char(ch) {
                    self.game.press(key, now);
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, config: RoundConfig) {
        if let Err(err) = self.game.start_round(config) {
            warn!(%err, "could not start round");
        }
    }

    fn toggle_mode(&mut self) {
        let mut config = self.game.config();
        config.mode = match config.mode {
            Mode::Daily => Mode::Practice,
            Mode::Practice => Mode::Daily,
        };
        debug!(mode = %config.mode, "switching mode");
        self.start(config);
    }

    fn change_length(&mut self, delta: isize) {
        let config = self.game.config();
        let length = config.word_length.saturating_add_signed(delta);
        if let Ok(next) = RoundConfig::new(length, config.mode) {
            self.start(next);
        }
    }

    fn new_practice_round(&mut self) {
        let config = self.game.config();
        self.start(RoundConfig {
            mode: Mode::Practice,
            ..config
        });
    }

    fn toggle_stats(&mut self) {
        if self.game.show_stats() {
            self.game.dismiss_stats();
        } else {
            self.game.open_stats();
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.game.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::wordlists::WordLists;
    use chrono::NaiveDate;

    fn press(app: &mut App<'_, MemoryStorage>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    fn app(words: &WordLists) -> App<'_, MemoryStorage> {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let game = Game::new(words, MemoryStorage::new(), RoundConfig::default(), today).unwrap();
        App::new(game)
    }

    #[test]
    fn letters_and_arrows_edit_the_row() {
        let words = WordLists::embedded();
        let mut app = app(&words);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.game.round().cursor(), 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.game.round().cursor(), 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.board().row(0)[1].letter, None);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game.round().cursor(), 1);
    }

    #[test]
    fn tab_and_arrows_switch_round_config() {
        let words = WordLists::embedded();
        let mut app = app(&words);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.game.config().mode, Mode::Practice);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.game.config().word_length, 6);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.game.config().word_length, 7);
    }

    #[test]
    fn escape_closes_stats_before_quitting() {
        let words = WordLists::embedded();
        let mut app = app(&words);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.game.show_stats());

        press(&mut app, KeyCode::Esc);
        assert!(!app.game.show_stats());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
