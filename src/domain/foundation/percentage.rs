//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Computes `round(100 * part / whole)`, rounding halves up.
    ///
    /// An empty whole yields zero. `part` is capped at `whole`.
    pub fn from_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part.min(whole) as u64;
        let whole = whole as u64;
        let rounded = (200 * part + whole) / (2 * whole);
        Self(rounded as u8)
    }

    /// Computes a rounded percentage from floating-point quantities.
    ///
    /// Non-positive or non-finite wholes yield zero; results above 100 clamp.
    pub fn from_fraction(part: f64, whole: f64) -> Self {
        if !whole.is_finite() || whole <= 0.0 || !part.is_finite() || part <= 0.0 {
            return Self::ZERO;
        }
        let value = (part / whole * 100.0).round();
        Self(value.min(100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for exactly zero percent.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true for exactly one hundred percent.
    pub fn is_full(&self) -> bool {
        self.0 == 100
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
