//! Letreco
//!
//! A daily word-guessing puzzle engine for Portuguese words of 4 to 7
//! letters, with a terminal front-end.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use letreco::game::{Game, RoundConfig};
//! use letreco::storage::MemoryStorage;
//! use letreco::wordlists::WordLists;
//! use std::time::Instant;
//!
//! let words = WordLists::embedded();
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let mut game = Game::new(&words, MemoryStorage::new(), RoundConfig::default(), today).unwrap();
//!
//! for ch in "TERMO".chars() {
//!     game.type_letter(ch);
//! }
//! let outcome = game.submit(Instant::now()).unwrap();
//! println!("{}", outcome.feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word of the day
pub mod daily;

// Round engine
pub mod game;

// Statistics and persistence
pub mod stats;
pub mod storage;

// Word lists
pub mod wordlists;

// Ambient setup
pub mod logging;
pub mod settings;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
