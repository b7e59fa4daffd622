//! Clock port.
//!
//! Handlers ask a `Clock` for the current time and pass it into the domain,
//! which never reads the system clock itself.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;

    /// Returns the current calendar date (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
