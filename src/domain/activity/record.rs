//! Activity records logged by students.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ActivityId, PillarId, Points, UserId};

/// Review status of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Logged by the student, awaiting review.
    #[default]
    Submitted,
    /// Approved by a reviewer; counts toward point totals.
    Accepted,
    /// Declined by a reviewer.
    Rejected,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityStatus::Submitted => "Submitted",
            ActivityStatus::Accepted => "Accepted",
            ActivityStatus::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}

/// A single logged unit of work contributing toward points.
///
/// Activities are owned by the activity store; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub user_id: UserId,
    pub pillar_id: PillarId,
    /// Program period (year/cycle index) the activity belongs to.
    pub period: u32,
    /// Unset for activities that have not been performed yet.
    #[serde(default)]
    pub date_performed: Option<NaiveDate>,
    #[serde(default)]
    pub status: ActivityStatus,
    /// Meaningful only when the activity is accepted.
    #[serde(default)]
    pub approved_points: Option<Points>,
}

impl Activity {
    /// Returns true if the activity has been accepted by a reviewer.
    pub fn is_accepted(&self) -> bool {
        self.status == ActivityStatus::Accepted
    }

    /// Points this activity adds to any total.
    ///
    /// Accepted activities contribute their approved points (zero if absent);
    /// everything else contributes nothing.
    pub fn contribution(&self) -> Points {
        if self.is_accepted() {
            self.approved_points.unwrap_or(Points::ZERO)
        } else {
            Points::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(status: ActivityStatus, points: Option<f64>) -> Activity {
        Activity {
            id: ActivityId::new("a-1").unwrap(),
            user_id: UserId::new("student-1").unwrap(),
            pillar_id: PillarId::new("service").unwrap(),
            period: 1,
            date_performed: NaiveDate::from_ymd_opt(2024, 5, 4),
            status,
            approved_points: points.map(Points::new),
        }
    }

    #[test]
    fn accepted_activity_contributes_approved_points() {
        let a = activity(ActivityStatus::Accepted, Some(12.5));
        assert_eq!(a.contribution().value(), 12.5);
    }

    #[test]
    fn accepted_activity_without_points_contributes_zero() {
        let a = activity(ActivityStatus::Accepted, None);
        assert_eq!(a.contribution(), Points::ZERO);
    }

    #[test]
    fn submitted_and_rejected_contribute_nothing() {
        assert_eq!(
            activity(ActivityStatus::Submitted, Some(40.0)).contribution(),
            Points::ZERO
        );
        assert_eq!(
            activity(ActivityStatus::Rejected, Some(40.0)).contribution(),
            Points::ZERO
        );
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "a-9",
            "userId": "student-1",
            "pillarId": "academics",
            "period": 2
        }"#;
        let a: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(a.status, ActivityStatus::Submitted);
        assert!(a.date_performed.is_none());
        assert!(a.approved_points.is_none());
    }

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": "a-10",
            "userId": "student-1",
            "pillarId": "academics",
            "period": 2,
            "datePerformed": "2023-11-02",
            "status": "accepted",
            "approvedPoints": 15
        }"#;
        let a: Activity = serde_json::from_str(json).unwrap();
        assert!(a.is_accepted());
        assert_eq!(a.contribution().value(), 15.0);
        assert_eq!(a.date_performed, NaiveDate::from_ymd_opt(2023, 11, 2));
    }
}
