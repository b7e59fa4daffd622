//! Cross-goal analytics for a student's goal list.

use serde::Serialize;
use std::collections::BTreeMap;

use super::aggregate::Goal;
use super::status::{GoalCategory, GoalStatus};
use crate::domain::foundation::Percentage;

/// Summary figures across a set of goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnalytics {
    pub total_goals: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub by_category: BTreeMap<GoalCategory, usize>,
    /// Rounded mean of goal progress. `None` when there are no goals, so
    /// the figure can be omitted from display instead of showing 0%.
    pub average_progress: Option<Percentage>,
}

impl GoalAnalytics {
    /// Computes analytics for `goals`.
    pub fn from_goals(goals: &[Goal]) -> Self {
        let mut by_category = BTreeMap::new();
        let (mut not_started, mut in_progress, mut completed) = (0, 0, 0);
        for goal in goals {
            *by_category.entry(goal.category()).or_insert(0) += 1;
            match goal.status() {
                GoalStatus::NotStarted => not_started += 1,
                GoalStatus::InProgress => in_progress += 1,
                GoalStatus::Completed => completed += 1,
            }
        }

        let average_progress = if goals.is_empty() {
            None
        } else {
            let sum: usize = goals.iter().map(|g| usize::from(g.progress().value())).sum();
            Some(Percentage::from_ratio(sum, goals.len() * 100))
        };

        Self {
            total_goals: goals.len(),
            not_started,
            in_progress,
            completed,
            by_category,
            average_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::foundation::{GoalId, Timestamp, UserId};
    use crate::domain::goal::GoalDetails;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn goal(category: GoalCategory, milestones: usize, done: usize) -> Goal {
        let now = Timestamp::start_of(today());
        let mut goal = Goal::create(
            GoalId::new(),
            UserId::new("student-1").unwrap(),
            GoalDetails {
                title: "Goal".to_string(),
                description: "Description".to_string(),
                category,
                deadline: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            },
            now,
        )
        .unwrap();
        for i in 0..milestones {
            goal = goal.add_milestone(&format!("m{}", i), today(), now).unwrap();
        }
        let ids: Vec<_> = goal.milestones().iter().take(done).map(|m| m.id).collect();
        for id in ids {
            goal = goal.toggle_milestone(&id, now).unwrap();
        }
        goal
    }

    #[test]
    fn no_goals_has_no_average() {
        let analytics = GoalAnalytics::from_goals(&[]);
        assert_eq!(analytics.total_goals, 0);
        assert_eq!(analytics.average_progress, None);
    }

    #[test]
    fn counts_statuses_and_categories() {
        let goals = vec![
            goal(GoalCategory::Academic, 2, 0),
            goal(GoalCategory::Academic, 2, 1),
            goal(GoalCategory::Career, 1, 1),
        ];

        let analytics = GoalAnalytics::from_goals(&goals);

        assert_eq!(analytics.total_goals, 3);
        assert_eq!(
            (analytics.not_started, analytics.in_progress, analytics.completed),
            (1, 1, 1)
        );
        assert_eq!(analytics.by_category[&GoalCategory::Academic], 2);
        assert_eq!(analytics.by_category[&GoalCategory::Career], 1);
        // (0 + 50 + 100) / 3 = 50
        assert_eq!(analytics.average_progress, Some(Percentage::new(50)));
    }
}
