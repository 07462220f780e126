//! Layered configuration
//!
//! Built-in defaults, then `config.toml` from the platform config dir, then
//! `LETRECO_*` environment variables (`LETRECO_WORD_LENGTH=6`).

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::game::{GameError, Mode, RoundConfig, Timing};
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("word_length must be between 4 and 7, got {0}")]
    InvalidLength(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub word_length: usize,
    pub mode: Mode,
    /// Where stats and saved rounds live; the platform data dir when unset
    pub data_dir: Option<PathBuf>,
    pub reveal_tile_ms: u64,
    pub reveal_tail_ms: u64,
    pub stats_delay_tail_ms: u64,
    pub toast_ms: u64,
}

impl Settings {
    /// Load from the default config file location
    ///
    /// # Errors
    /// Returns an error if a source cannot be parsed or the word length is
    /// out of range.
    pub fn load() -> Result<Self, SettingsError> {
        let path = ProjectDirs::from("", "", "letreco")
            .map(|dirs| dirs.config_dir().join("config.toml"));
        Self::load_from(path.as_deref())
    }

    /// Load with an explicit config file, skipped when missing
    ///
    /// # Errors
    /// Same as [`Settings::load`].
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("word_length", 5)?
            .set_default("mode", "daily")?
            .set_default("reveal_tile_ms", 300)?
            .set_default("reveal_tail_ms", 200)?
            .set_default("stats_delay_tail_ms", 500)?
            .set_default("toast_ms", 2000)?;

        if let Some(path) = config_path
            && path.exists()
        {
            debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(File::from(path));
        }

        let settings: Self = builder
            .add_source(Environment::with_prefix("LETRECO").try_parsing(true))
            .build()?
            .try_deserialize()?;

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&settings.word_length) {
            return Err(SettingsError::InvalidLength(settings.word_length));
        }
        Ok(settings)
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        Timing {
            reveal_tile: Duration::from_millis(self.reveal_tile_ms),
            reveal_tail: Duration::from_millis(self.reveal_tail_ms),
            stats_tail: Duration::from_millis(self.stats_delay_tail_ms),
            toast: Duration::from_millis(self.toast_ms),
        }
    }

    /// # Errors
    /// Returns an error if the word length is unsupported.
    pub fn round_config(&self) -> Result<RoundConfig, GameError> {
        RoundConfig::new(self.word_length, self.mode)
    }
}
