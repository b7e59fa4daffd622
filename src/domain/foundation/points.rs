//! Points value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;
use std::iter::Sum;
use std::ops::Add;

/// A quantity of program points.
///
/// Points are fractional (reviewers may award partial credit) and never
/// clamped: a total may exceed any pillar budget. Stored values must be
/// finite and non-negative; anything else is rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Points(f64);

impl Points {
    /// No points.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new Points value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Points {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::invalid_format(
                "points",
                format!("must be a finite, non-negative number, got {}", value),
            ));
        }
        Ok(Self(value))
    }
}

impl From<Points> for f64 {
    fn from(points: Points) -> Self {
        points.0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Self) -> Self::Output {
        Points(self.0 + rhs.0)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pts", self.0)
    }
}
