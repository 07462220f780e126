//! Cosmetic deadlines
//!
//! Nothing here affects game state. The front-end passes in the current
//! [`Instant`] and polls with [`Game::tick`](crate::game::Game::tick),
//! which keeps every deadline testable without sleeping.

use std::time::{Duration, Instant};

/// Animation and popup durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Flip time per tile of the revealed row
    pub reveal_tile: Duration,
    /// Extra time after the last tile before input unlocks
    pub reveal_tail: Duration,
    /// Extra time after the last tile before the stats popup
    pub stats_tail: Duration,
    /// How long a toast stays visible
    pub toast: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reveal_tile: Duration::from_millis(300),
            reveal_tail: Duration::from_millis(200),
            stats_tail: Duration::from_millis(500),
            toast: Duration::from_millis(2000),
        }
    }
}

impl Timing {
    /// Zero durations; every deadline fires on the next tick
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            reveal_tile: Duration::ZERO,
            reveal_tail: Duration::ZERO,
            stats_tail: Duration::ZERO,
            toast: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn reveal_duration(&self, word_length: usize) -> Duration {
        self.reveal_tile * word_length as u32 + self.reveal_tail
    }

    #[must_use]
    pub fn stats_delay(&self, word_length: usize) -> Duration {
        self.reveal_tile * word_length as u32 + self.stats_tail
    }
}

/// What expired during a [`Game::tick`](crate::game::Game::tick)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickEvents {
    /// The reveal animation of this row finished
    pub reveal_finished: Option<usize>,
    /// The stats popup should open now
    pub show_stats: bool,
    /// The toast went away
    pub toast_expired: bool,
}

impl TickEvents {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Default)]
pub(crate) struct Timers {
    reveal: Option<(usize, Instant)>,
    show_stats: Option<Instant>,
    toast: Option<(String, Instant)>,
}

impl Timers {
    pub(crate) fn start_reveal(&mut self, row: usize, deadline: Instant) {
        self.reveal = Some((row, deadline));
    }

    pub(crate) fn schedule_stats(&mut self, deadline: Instant) {
        self.show_stats = Some(deadline);
    }

    pub(crate) fn show_toast(&mut self, message: String, deadline: Instant) {
        self.toast = Some((message, deadline));
    }

    pub(crate) fn revealing_row(&self) -> Option<usize> {
        self.reveal.map(|(row, _)| row)
    }

    pub(crate) fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|(message, _)| message.as_str())
    }

    /// Fire every deadline at or before `now`
    pub(crate) fn tick(&mut self, now: Instant) -> TickEvents {
        let mut events = TickEvents::default();

        if let Some((row, deadline)) = self.reveal
            && now >= deadline
        {
            self.reveal = None;
            events.reveal_finished = Some(row);
        }
        if let Some(deadline) = self.show_stats
            && now >= deadline
        {
            self.show_stats = None;
            events.show_stats = true;
        }
        if let Some((_, deadline)) = &self.toast
            && now >= *deadline
        {
            self.toast = None;
            events.toast_expired = true;
        }

        events
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_scale_with_length() {
        let timing = Timing::default();
        assert_eq!(timing.reveal_duration(5), Duration::from_millis(1700));
        assert_eq!(timing.stats_delay(5), Duration::from_millis(2000));
        assert_eq!(timing.reveal_duration(7), Duration::from_millis(2300));
    }

    #[test]
    fn deadlines_fire_once() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.start_reveal(2, start + Duration::from_millis(100));
        timers.schedule_stats(start + Duration::from_millis(200));

        assert!(timers.tick(start).is_empty());
        assert_eq!(timers.revealing_row(), Some(2));

        let events = timers.tick(start + Duration::from_millis(150));
        assert_eq!(events.reveal_finished, Some(2));
        assert!(!events.show_stats);
        assert_eq!(timers.revealing_row(), None);

        assert!(timers.tick(start + Duration::from_millis(250)).show_stats);
        assert!(timers.tick(start + Duration::from_millis(300)).is_empty());
    }

    #[test]
    fn toast_expires() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.show_toast("Palavra não encontrada".into(), start + Duration::from_secs(2));
        assert_eq!(timers.toast(), Some("Palavra não encontrada"));

        assert!(timers.tick(start + Duration::from_secs(1)).is_empty());
        assert!(timers.tick(start + Duration::from_secs(2)).toast_expired);
        assert_eq!(timers.toast(), None);
    }

    #[test]
    fn clear_discards_pending_deadlines() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.start_reveal(0, start);
        timers.schedule_stats(start);
        timers.clear();
        assert!(timers.tick(start + Duration::from_secs(10)).is_empty());
    }
}
