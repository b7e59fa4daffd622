//! ListGoalsHandler - Query handler for listing a user's goals.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::goal::{Goal, GoalCategory, GoalError, GoalStatus};
use crate::ports::GoalRepository;

/// Query to list goals for a user.
#[derive(Debug, Clone)]
pub struct ListGoalsQuery {
    pub user_id: UserId,
    pub status: Option<GoalStatus>,
    pub category: Option<GoalCategory>,
}

impl ListGoalsQuery {
    /// Create a query for all of a user's goals.
    pub fn all(user_id: UserId) -> Self {
        Self {
            user_id,
            status: None,
            category: None,
        }
    }

    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = Some(category);
        self
    }

    fn matches(&self, goal: &Goal) -> bool {
        self.status.map_or(true, |s| goal.status() == s)
            && self.category.map_or(true, |c| goal.category() == c)
    }
}

/// Handler for listing goals, oldest first.
pub struct ListGoalsHandler {
    repository: Arc<dyn GoalRepository>,
}

impl ListGoalsHandler {
    pub fn new(repository: Arc<dyn GoalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListGoalsQuery) -> Result<Vec<Goal>, GoalError> {
        let mut goals = self.repository.find_by_user(&query.user_id).await?;
        goals.retain(|g| query.matches(g));
        Ok(goals)
    }
}
