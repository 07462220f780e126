//! Stats overview across word lengths

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::stats::{self, GameStats};
use crate::storage::Storage;

/// Stats for every supported length, streaks refreshed for `today`
pub fn collect_stats<S: Storage>(storage: &S, today: i64) -> Vec<(usize, GameStats)> {
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH)
        .map(|length| (length, stats::load(storage, length, today)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn lengths_are_independent() {
        let mut storage = MemoryStorage::new();
        let six = GameStats::default().record_result(true, 3, 40);
        stats::save(&mut storage, 6, &six);

        let all = collect_stats(&storage, 40);
        assert_eq!(all.len(), 4);
        assert_eq!(all[2], (6, six));
        assert_eq!(all[1], (5, GameStats::default()));
    }
}
