//! GoalStatus and GoalCategory enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Completion status of a goal.
///
/// Always derived from the goal's progress; see [`GoalStatus::from_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    /// Derives the status from a progress percentage.
    ///
    /// - 0% -> NotStarted
    /// - 100% -> Completed
    /// - anything in between -> InProgress
    pub fn from_progress(progress: Percentage) -> Self {
        if progress.is_zero() {
            GoalStatus::NotStarted
        } else if progress.is_full() {
            GoalStatus::Completed
        } else {
            GoalStatus::InProgress
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalStatus::NotStarted => "Not Started",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

/// Area of a student's life a goal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Academic,
    Career,
    Personal,
    Professional,
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalCategory::Academic => "Academic",
            GoalCategory::Career => "Career",
            GoalCategory::Personal => "Personal",
            GoalCategory::Professional => "Professional",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_progress_is_not_started() {
        assert_eq!(GoalStatus::from_progress(Percentage::ZERO), GoalStatus::NotStarted);
    }

    #[test]
    fn full_progress_is_completed() {
        assert_eq!(GoalStatus::from_progress(Percentage::HUNDRED), GoalStatus::Completed);
    }

    #[test]
    fn partial_progress_is_in_progress() {
        assert_eq!(GoalStatus::from_progress(Percentage::new(1)), GoalStatus::InProgress);
        assert_eq!(GoalStatus::from_progress(Percentage::new(99)), GoalStatus::InProgress);
    }

    #[test]
    fn default_is_not_started() {
        assert_eq!(GoalStatus::default(), GoalStatus::NotStarted);
    }

    #[test]
    fn status_serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::NotStarted).unwrap(),
            "\"not_started\""
        );
        assert_eq!(
            serde_json::to_string(&GoalStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn category_round_trips_through_json() {
        let category: GoalCategory = serde_json::from_str("\"professional\"").unwrap();
        assert_eq!(category, GoalCategory::Professional);
        assert_eq!(serde_json::to_string(&GoalCategory::Career).unwrap(), "\"career\"");
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", GoalStatus::InProgress), "In Progress");
        assert_eq!(format!("{}", GoalCategory::Academic), "Academic");
    }

    proptest! {
        #[test]
        fn completed_iff_hundred_and_not_started_iff_zero(value in 0u8..=100) {
            let status = GoalStatus::from_progress(Percentage::new(value));
            prop_assert_eq!(status == GoalStatus::Completed, value == 100);
            prop_assert_eq!(status == GoalStatus::NotStarted, value == 0);
        }
    }
}
