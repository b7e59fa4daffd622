//! Clock adapters.

use chrono::{Duration, NaiveDate};
use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// System clock implementation (production use).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock frozen at a settable instant, for tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    current: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self {
            current: RwLock::new(time),
        }
    }

    /// Clock fixed at midnight UTC of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(Timestamp::start_of(date))
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, time: Timestamp) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = time;
    }

    /// Moves the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = Timestamp::from_datetime(*current.as_datetime() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn fixed_clock_can_advance() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        clock.advance_days(2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
