//! GetGoalHandler - Query handler for retrieving one goal.

use std::sync::Arc;

use super::load_goal;
use crate::domain::foundation::GoalId;
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalRepository;

/// Query to get a goal by ID.
#[derive(Debug, Clone)]
pub struct GetGoalQuery {
    pub goal_id: GoalId,
}

/// Handler for retrieving goal details.
pub struct GetGoalHandler {
    repository: Arc<dyn GoalRepository>,
}

impl GetGoalHandler {
    pub fn new(repository: Arc<dyn GoalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetGoalQuery) -> Result<Goal, GoalError> {
        load_goal(self.repository.as_ref(), query.goal_id).await
    }
}
