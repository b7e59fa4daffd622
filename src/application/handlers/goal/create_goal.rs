//! CreateGoalHandler - Command handler for creating new goals.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::{GoalId, UserId};
use crate::domain::goal::{Goal, GoalCategory, GoalDetails, GoalError};
use crate::ports::{Clock, GoalRepository};

/// Command to create a new goal.
#[derive(Debug, Clone)]
pub struct CreateGoalCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub deadline: NaiveDate,
}

/// Handler for creating goals.
pub struct CreateGoalHandler {
    repository: Arc<dyn GoalRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateGoalHandler {
    pub fn new(repository: Arc<dyn GoalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: CreateGoalCommand) -> Result<Goal, GoalError> {
        // 1. Build the aggregate (validates input)
        let goal = Goal::create(
            GoalId::new(),
            cmd.user_id,
            GoalDetails {
                title: cmd.title,
                description: cmd.description,
                category: cmd.category,
                deadline: cmd.deadline,
            },
            self.clock.now(),
        )?;

        // 2. Persist
        self.repository.save(&goal).await?;

        tracing::info!(goal_id = %goal.id(), user_id = %goal.user_id(), "goal created");
        Ok(goal)
    }
}
