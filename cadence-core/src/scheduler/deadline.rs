//! Additive deadline scheduler

use cadence_hal::Tick;

use crate::time::has_reached;

/// Tracks the tick at which the next sample must be taken
///
/// The deadline starts at the tick passed to [`new`](Self::new) and only
/// ever moves by [`advance`](Self::advance). If the caller falls behind,
/// the deadline stays in the past and [`is_due`](Self::is_due) keeps
/// returning `true` until the missed samples have been taken, so the long
/// run average rate is exactly `1_000_000 / period_us` Hz. There is no cap
/// on how many samples a catch-up burst may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeadlineScheduler {
    next_deadline: Tick,
}

impl DeadlineScheduler {
    /// Create a scheduler whose first deadline is `start`
    ///
    /// Pass the current tick to take the first sample immediately.
    pub const fn new(start: Tick) -> Self {
        Self {
            next_deadline: start,
        }
    }

    /// The tick at which the next sample is due
    pub const fn next_deadline(&self) -> Tick {
        self.next_deadline
    }

    /// Has `now` reached or passed the deadline?
    pub fn is_due(&self, now: Tick) -> bool {
        has_reached(now, self.next_deadline)
    }

    /// Move the deadline forward by exactly one period
    pub fn advance(&mut self, period_us: u32) {
        self.next_deadline = self.next_deadline.wrapping_add(period_us);
    }

    /// Microseconds until the deadline, or `None` if it is already due
    ///
    /// Agrees with [`is_due`](Self::is_due) for every `now`, including a
    /// tick exactly half the counter range away from the deadline.
    pub fn micros_until_due(&self, now: Tick) -> Option<u32> {
        if self.is_due(now) {
            None
        } else {
            Some(self.next_deadline.wrapping_sub(now))
        }
    }

    /// How far `now` is past the deadline (0 if not yet due)
    pub fn lateness(&self, now: Tick) -> u32 {
        if self.is_due(now) {
            now.wrapping_sub(self.next_deadline)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD_US: u32 = 1000;

    #[test]
    fn test_due_immediately_at_start() {
        let scheduler = DeadlineScheduler::new(5000);
        assert!(scheduler.is_due(5000));
        assert_eq!(scheduler.micros_until_due(5000), None);
        assert_eq!(scheduler.lateness(5000), 0);
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut scheduler = DeadlineScheduler::new(0);
        scheduler.advance(PERIOD_US);

        assert!(!scheduler.is_due(999));
        assert_eq!(scheduler.micros_until_due(999), Some(1));
        assert_eq!(scheduler.micros_until_due(250), Some(750));
        assert!(scheduler.is_due(1000));
    }

    #[test]
    fn test_deadlines_step_by_exact_period() {
        let mut scheduler = DeadlineScheduler::new(12_345);

        for i in 1..=10_000u32 {
            let previous = scheduler.next_deadline();
            scheduler.advance(PERIOD_US);
            assert_eq!(scheduler.next_deadline().wrapping_sub(previous), PERIOD_US);
            assert_eq!(scheduler.next_deadline(), 12_345 + i * PERIOD_US);
        }
    }

    #[test]
    fn test_late_advance_ignores_now() {
        let mut scheduler = DeadlineScheduler::new(0);
        scheduler.advance(PERIOD_US);

        // Checked 5 ms after the deadline
        let now = 6000;
        assert!(scheduler.is_due(now));
        assert_eq!(scheduler.lateness(now), 5000);

        scheduler.advance(PERIOD_US);
        assert_eq!(scheduler.next_deadline(), 2000);
        assert!(scheduler.is_due(now));
    }

    #[test]
    fn test_wraparound() {
        let start = u32::MAX - 500;
        let mut scheduler = DeadlineScheduler::new(start);
        assert!(scheduler.is_due(start));

        scheduler.advance(PERIOD_US);
        assert_eq!(scheduler.next_deadline(), 499);

        // Close to the top of the counter: not due yet
        assert!(!scheduler.is_due(u32::MAX - 100));
        assert_eq!(scheduler.micros_until_due(u32::MAX - 100), Some(600));

        // Counter wrapped, still short of the deadline
        assert!(!scheduler.is_due(200));
        assert_eq!(scheduler.micros_until_due(200), Some(299));

        // Exactly at the wrapped deadline
        assert!(scheduler.is_due(499));
        assert_eq!(scheduler.lateness(750), 251);
    }

    #[test]
    fn test_half_range_away_is_not_due() {
        let scheduler = DeadlineScheduler::new(0);
        let now = 0x8000_0000;

        assert!(!scheduler.is_due(now));
        assert_eq!(scheduler.micros_until_due(now), Some(0x8000_0000));
        assert_eq!(scheduler.lateness(now), 0);

        // One tick closer is in the past
        assert!(scheduler.is_due(now - 1));
        assert_eq!(scheduler.micros_until_due(now - 1), None);
        assert_eq!(scheduler.lateness(now - 1), 0x7FFF_FFFF);
    }
}
