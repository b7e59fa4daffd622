//! Milestones and feedback owned by a goal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FeedbackId, MilestoneId, Timestamp};

/// A sub-task of a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Milestone {
    /// Creates an incomplete milestone.
    pub fn new(id: MilestoneId, title: String, deadline: NaiveDate) -> Self {
        Self {
            id,
            title,
            deadline,
            completed: false,
        }
    }

    /// Returns a copy with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// An append-only note left on a goal by a mentor or the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub content: String,
    pub author: String,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_milestone_is_incomplete() {
        let m = Milestone::new(
            MilestoneId::new(),
            "Draft essay".to_string(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        assert!(!m.completed);
    }

    #[test]
    fn toggled_flips_only_completion() {
        let m = Milestone::new(
            MilestoneId::new(),
            "Draft essay".to_string(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        let t = m.toggled();
        assert!(t.completed);
        assert_eq!(t.id, m.id);
        assert_eq!(t.title, m.title);
        assert_eq!(t.toggled(), m);
    }
}
