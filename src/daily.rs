//! Word of the day selection
//!
//! The daily word is a pure function of the word length and the calendar
//! date, so every player sees the same word on the same day. The arithmetic
//! (string hash, Mulberry32, index scaling) is fixed: changing any of it
//! changes every published puzzle.
//!
//! Nothing here is cryptographically secure.

use crate::core::Word;
use chrono::{Datelike, NaiveDate};

/// 2024-01-01, the first day of the puzzle calendar, as days from the
/// common era (chrono counts 0001-01-01 as day 1)
const EPOCH_DAYS_FROM_CE: i64 = 738_886;

/// Multiplier mixing the word length into the date hash
const LENGTH_SALT: i32 = 9999;

/// Mulberry32, a small 32-bit generator with a full-period state
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Per-day, per-length hash seed
///
/// The key string is `"{year}-{month}-{day}"` with a zero-based month, and
/// the hash starts from `length * 9999` before folding in each byte with
/// the classic `h * 31 + c` recurrence in wrapping 32-bit arithmetic.
#[must_use]
pub fn date_seed(length: usize, date: NaiveDate) -> u32 {
    let key = format!("{}-{}-{}", date.year(), date.month0(), date.day());

    let mut hash = (length as i32).wrapping_mul(LENGTH_SALT);
    for byte in key.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(byte));
    }

    hash.unsigned_abs()
}

/// Index into an answer pool of `pool_len` words for the given day
///
/// Returns `None` for an empty pool.
#[must_use]
pub fn daily_index(length: usize, date: NaiveDate, pool_len: usize) -> Option<usize> {
    if pool_len == 0 {
        return None;
    }
    let mut rng = Mulberry32::new(date_seed(length, date));
    let index = (rng.next_f64() * pool_len as f64).floor() as usize;
    Some(index.min(pool_len - 1))
}

/// The word of the day for a length, drawn from its answer pool
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use letreco::daily::daily_word;
/// use letreco::wordlists::WordLists;
///
/// let lists = WordLists::embedded();
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let first = daily_word(lists.answers(5), 5, date);
/// assert_eq!(first, daily_word(lists.answers(5), 5, date));
/// ```
#[must_use]
pub fn daily_word(answers: &[Word], length: usize, date: NaiveDate) -> Option<&Word> {
    daily_index(length, date, answers.len()).map(|index| &answers[index])
}

/// Whole days elapsed since 2024-01-01; negative before it
#[must_use]
pub fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}
