//! Word pools for each supported length
//!
//! `WordLists` is the word source for the game: an ordered pool of target
//! words per length and a larger membership set of accepted guesses. Pools
//! never mix lengths.

mod embedded;
pub mod loader;

pub use embedded::{
    ALLOWED_4, ALLOWED_5, ALLOWED_6, ALLOWED_7, ANSWERS_4, ANSWERS_5, ANSWERS_6, ANSWERS_7,
};

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

#[derive(Debug, Default, Clone)]
struct Pool {
    answers: Vec<Word>,
    valid: FxHashSet<String>,
}

/// Answer and guess pools, partitioned by word length
#[derive(Debug, Default, Clone)]
pub struct WordLists {
    pools: FxHashMap<usize, Pool>,
}

impl WordLists {
    /// Pools compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut lists = Self::default();
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            if let Some((answers, allowed)) = embedded::lists_for(length) {
                lists.insert(
                    length,
                    loader::words_from_slice(answers),
                    loader::words_from_slice(allowed),
                );
            }
        }
        lists
    }

    /// Register the pools for one length
    ///
    /// Answers are always accepted as guesses. Words of any other length are
    /// dropped with a warning.
    pub fn insert(&mut self, length: usize, answers: Vec<Word>, extra_guesses: Vec<Word>) {
        let keep = |word: &Word| {
            if word.len() == length {
                true
            } else {
                warn!(word = %word, length, "dropping word of the wrong length");
                false
            }
        };

        let answers: Vec<Word> = answers.into_iter().filter(|w| keep(w)).collect();
        let valid = answers
            .iter()
            .chain(extra_guesses.iter().filter(|w| keep(w)))
            .map(Word::key)
            .collect();

        self.pools.insert(length, Pool { answers, valid });
    }

    /// Ordered target pool for a length; empty for unsupported lengths
    #[must_use]
    pub fn answers(&self, length: usize) -> &[Word] {
        self.pools
            .get(&length)
            .map(|pool| pool.answers.as_slice())
            .unwrap_or_default()
    }

    /// Normalized keys of every accepted guess for a length
    #[must_use]
    pub fn valid_guesses(&self, length: usize) -> Option<&FxHashSet<String>> {
        self.pools.get(&length).map(|pool| &pool.valid)
    }

    /// Check a normalized key against the accepted guesses of its length
    #[must_use]
    pub fn is_valid_guess(&self, key: &str) -> bool {
        let length = key.chars().count();
        self.valid_guesses(length)
            .is_some_and(|valid| valid.contains(key))
    }

    /// Lengths that have a non-empty answer pool
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .pools
            .iter()
            .filter(|(_, pool)| !pool.answers.is_empty())
            .map(|(&length, _)| length)
            .collect();
        lengths.sort_unstable();
        lengths
    }
}
