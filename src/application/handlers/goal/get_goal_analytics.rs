//! GetGoalAnalyticsHandler - Query handler for cross-goal summary figures.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::goal::{GoalAnalytics, GoalError};
use crate::ports::GoalRepository;

/// Query for a user's goal analytics.
#[derive(Debug, Clone)]
pub struct GetGoalAnalyticsQuery {
    pub user_id: UserId,
}

/// Handler for goal analytics.
pub struct GetGoalAnalyticsHandler {
    repository: Arc<dyn GoalRepository>,
}

impl GetGoalAnalyticsHandler {
    pub fn new(repository: Arc<dyn GoalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetGoalAnalyticsQuery) -> Result<GoalAnalytics, GoalError> {
        let goals = self.repository.find_by_user(&query.user_id).await?;
        Ok(GoalAnalytics::from_goals(&goals))
    }
}
