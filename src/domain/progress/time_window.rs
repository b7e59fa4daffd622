//! Calendar windows used to scope point aggregation.
//!
//! Every predicate takes the reference date from the caller; nothing here
//! reads the system clock.

use chrono::{Datelike, NaiveDate};

/// A calendar year or a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    Year { year: i32 },
    Month { year: i32, month: u32 },
}

impl TimeWindow {
    /// Window covering a whole calendar year.
    pub fn year(year: i32) -> Self {
        TimeWindow::Year { year }
    }

    /// Window covering the calendar month that contains `reference`.
    pub fn month_of(reference: NaiveDate) -> Self {
        TimeWindow::Month {
            year: reference.year(),
            month: reference.month(),
        }
    }

    /// Returns true if `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            TimeWindow::Year { year } => date.year() == year,
            TimeWindow::Month { year, month } => date.year() == year && date.month() == month,
        }
    }

    /// Like [`contains`](Self::contains), but an unset date never matches.
    pub fn contains_opt(&self, date: Option<NaiveDate>) -> bool {
        date.map_or(false, |d| self.contains(d))
    }
}

/// Returns true if `date` is set and falls in calendar year `year`.
pub fn in_year(date: Option<NaiveDate>, year: i32) -> bool {
    TimeWindow::year(year).contains_opt(date)
}

/// Returns true if `date` is set and shares month and year with `reference`.
pub fn in_same_month(date: Option<NaiveDate>, reference: NaiveDate) -> bool {
    TimeWindow::month_of(reference).contains_opt(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn year_window_matches_whole_year() {
        let w = TimeWindow::year(2023);
        assert!(w.contains(d(2023, 1, 1)));
        assert!(w.contains(d(2023, 12, 31)));
        assert!(!w.contains(d(2022, 12, 31)));
        assert!(!w.contains(d(2024, 1, 1)));
    }

    #[test]
    fn month_window_requires_same_year() {
        let w = TimeWindow::month_of(d(2024, 3, 15));
        assert!(w.contains(d(2024, 3, 1)));
        assert!(w.contains(d(2024, 3, 31)));
        assert!(!w.contains(d(2023, 3, 15)));
        assert!(!w.contains(d(2024, 4, 1)));
    }

    #[test]
    fn unset_dates_never_match() {
        assert!(!in_year(None, 2024));
        assert!(!in_same_month(None, d(2024, 1, 1)));
    }
}
