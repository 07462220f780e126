//! Per-length play statistics
//!
//! One [`GameStats`] exists per word length. It changes exactly once per
//! finished daily round and is written back as a single JSON document.
//! Stored documents carry a schema version; anything that fails to decode
//! or validate is replaced by empty stats with a warning.

use crate::core::MAX_ATTEMPTS;
use crate::storage::{Storage, StorageKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Current on-disk schema version
pub const STATS_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("malformed stats document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported stats version {0}")]
    UnsupportedVersion(u32),
    #[error("inconsistent stats: {0}")]
    Inconsistent(&'static str),
}

/// Counters, streaks and the win histogram for one word length
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// `win_distribution[k]` counts wins in `k + 1` attempts
    pub win_distribution: [u32; MAX_ATTEMPTS],
    /// Day number of the last recorded result
    pub last_played_day: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct StatsRecord {
    version: u32,
    #[serde(flatten)]
    stats: GameStats,
}

/// Shape written by the first release, before versioning
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyStats {
    played: u32,
    wins: u32,
    current_streak: u32,
    max_streak: u32,
    distribution: [u32; MAX_ATTEMPTS],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredStats {
    Versioned(StatsRecord),
    Legacy(LegacyStats),
}

impl GameStats {
    /// Record the result of a finished round
    ///
    /// # Panics
    /// Panics if a win is recorded with `attempts_used` outside `1..=6`.
    ///
    /// # Examples
    /// ```
    /// use letreco::stats::GameStats;
    ///
    /// let stats = GameStats::default()
    ///     .record_result(true, 2, 100)
    ///     .record_result(false, 6, 101);
    /// assert_eq!(stats.games_played, 2);
    /// assert_eq!(stats.win_distribution[1], 1);
    /// assert_eq!(stats.current_streak, 0);
    /// ```
    #[must_use]
    pub fn record_result(mut self, won: bool, attempts_used: usize, today: i64) -> Self {
        self.refresh_streak(today);

        self.games_played += 1;
        if won {
            assert!(
                (1..=MAX_ATTEMPTS).contains(&attempts_used),
                "a win takes between 1 and {MAX_ATTEMPTS} attempts, got {attempts_used}"
            );
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            self.win_distribution[attempts_used - 1] += 1;
        } else {
            self.current_streak = 0;
        }
        self.last_played_day = Some(today);
        self
    }

    /// Break the streak if a whole day went by without a result
    ///
    /// Returns true when the streak was reset.
    pub fn refresh_streak(&mut self, today: i64) -> bool {
        match self.last_played_day {
            Some(last) if today - last > 1 && self.current_streak > 0 => {
                debug!(last, today, streak = self.current_streak, "streak broken by absence");
                self.current_streak = 0;
                true
            }
            _ => false,
        }
    }

    /// Rounded share of games won, 0 when nothing was played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
    }

    /// Serialize with the current schema version
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<String, StatsError> {
        let record = StatsRecord {
            version: STATS_VERSION,
            stats: self.clone(),
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Decode and validate a stored document
    ///
    /// # Errors
    /// Returns an error for malformed JSON, an unknown version, or counters
    /// that contradict each other.
    pub fn decode(raw: &str) -> Result<Self, StatsError> {
        let stats = match serde_json::from_str::<StoredStats>(raw)? {
            StoredStats::Versioned(record) if record.version == STATS_VERSION => record.stats,
            StoredStats::Versioned(record) => {
                return Err(StatsError::UnsupportedVersion(record.version));
            }
            StoredStats::Legacy(legacy) => Self {
                games_played: legacy.played,
                games_won: legacy.wins,
                current_streak: legacy.current_streak,
                max_streak: legacy.max_streak,
                win_distribution: legacy.distribution,
                last_played_day: None,
            },
        };
        stats.validate()?;
        Ok(stats)
    }

    fn validate(&self) -> Result<(), StatsError> {
        if self.games_won > self.games_played {
            return Err(StatsError::Inconsistent("more wins than games"));
        }
        if self.win_distribution.iter().sum::<u32>() != self.games_won {
            return Err(StatsError::Inconsistent("distribution does not sum to wins"));
        }
        if self.current_streak > self.max_streak {
            return Err(StatsError::Inconsistent("current streak above max streak"));
        }
        if self.max_streak > self.games_won {
            return Err(StatsError::Inconsistent("streak longer than wins"));
        }
        Ok(())
    }
}

/// Load stats for a length, applying the absence rule for `today`
///
/// Missing, unreadable or corrupt documents yield empty stats.
pub fn load<S: Storage>(storage: &S, word_length: usize, today: i64) -> GameStats {
    let key = StorageKey::Stats { word_length }.to_string();

    let mut stats = match storage.read(&key) {
        Ok(Some(raw)) => GameStats::decode(&raw).unwrap_or_else(|err| {
            warn!(%key, %err, "discarding stored stats");
            GameStats::default()
        }),
        Ok(None) => GameStats::default(),
        Err(err) => {
            warn!(%key, %err, "could not read stats, starting empty");
            GameStats::default()
        }
    };

    stats.refresh_streak(today);
    stats
}

/// Persist stats for a length in one write
///
/// Failures are logged and dropped; returns whether the write landed.
pub fn save<S: Storage>(storage: &mut S, word_length: usize, stats: &GameStats) -> bool {
    let key = StorageKey::Stats { word_length }.to_string();

    let result = stats
        .encode()
        .map_err(|err| err.to_string())
        .and_then(|raw| storage.write(&key, &raw).map_err(|err| err.to_string()));

    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(%key, %err, "failed to save stats");
            false
        }
    }
}
