//! Scholarship eligibility tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Points;

/// Lowest total that earns a prorated scholarship.
pub const PRORATED_THRESHOLD: f64 = 70.0;

/// Lowest total that earns the full scholarship.
pub const FULL_THRESHOLD: f64 = 90.0;

/// Eligibility outcome derived from a point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityTier {
    /// Below the prorated threshold.
    None,
    /// At least 70 points, below 90.
    Prorated,
    /// 90 points or more. No upper bound is enforced.
    Full,
}

impl EligibilityTier {
    /// Maps a point total to its tier.
    ///
    /// Each threshold is inclusive on its lower bound. Values that are not
    /// comparable (NaN) fall through to `None`.
    pub fn for_points(points: Points) -> Self {
        let value = points.value();
        if value >= FULL_THRESHOLD {
            EligibilityTier::Full
        } else if value >= PRORATED_THRESHOLD {
            EligibilityTier::Prorated
        } else {
            EligibilityTier::None
        }
    }

    /// Points still needed to reach the next tier, if there is one.
    ///
    /// The gap never exceeds the prorated threshold.
    pub fn points_to_next(points: Points) -> Option<Points> {
        let value = points.value();
        match Self::for_points(points) {
            EligibilityTier::None if value.is_finite() => {
                Some(Points::new(PRORATED_THRESHOLD - value.max(0.0)))
            }
            EligibilityTier::None => Some(Points::new(PRORATED_THRESHOLD)),
            EligibilityTier::Prorated => Some(Points::new(FULL_THRESHOLD - value)),
            EligibilityTier::Full => None,
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            EligibilityTier::None => "Not eligible",
            EligibilityTier::Prorated => "Prorated",
            EligibilityTier::Full => "Full",
        }
    }
}

/// Maps a point total to its eligibility tier.
pub fn tier(points: Points) -> EligibilityTier {
    EligibilityTier::for_points(points)
}

impl fmt::Display for EligibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: f64) -> EligibilityTier {
        tier(Points::new(value))
    }

    #[test]
    fn boundaries_are_inclusive_on_lower_bound() {
        assert_eq!(t(69.999), EligibilityTier::None);
        assert_eq!(t(70.0), EligibilityTier::Prorated);
        assert_eq!(t(89.999), EligibilityTier::Prorated);
        assert_eq!(t(90.0), EligibilityTier::Full);
        assert_eq!(t(1000.0), EligibilityTier::Full);
    }

    #[test]
    fn zero_and_negative_are_none() {
        assert_eq!(t(0.0), EligibilityTier::None);
        assert_eq!(t(-5.0), EligibilityTier::None);
    }

    #[test]
    fn nan_is_none() {
        assert_eq!(t(f64::NAN), EligibilityTier::None);
    }

    #[test]
    fn points_to_next_reports_gap() {
        assert_eq!(
            EligibilityTier::points_to_next(Points::new(60.0)),
            Some(Points::new(10.0))
        );
        assert_eq!(
            EligibilityTier::points_to_next(Points::new(75.0)),
            Some(Points::new(15.0))
        );
        assert_eq!(EligibilityTier::points_to_next(Points::new(90.0)), None);
    }

    #[test]
    fn points_to_next_never_exceeds_prorated_threshold() {
        assert_eq!(
            EligibilityTier::points_to_next(Points::new(-40.0)),
            Some(Points::new(PRORATED_THRESHOLD))
        );
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(EligibilityTier::None < EligibilityTier::Prorated);
        assert!(EligibilityTier::Prorated < EligibilityTier::Full);
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EligibilityTier::Prorated).unwrap(),
            "\"prorated\""
        );
        let tier: EligibilityTier = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(tier, EligibilityTier::None);
    }
}
