//! UpdateGoalHandler - Command handler for editing goal details.

use std::sync::Arc;

use super::load_goal;
use crate::domain::foundation::GoalId;
use crate::domain::goal::{Goal, GoalError, GoalUpdate};
use crate::ports::{Clock, GoalRepository};

/// Command to update a goal's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateGoalCommand {
    pub goal_id: GoalId,
    pub update: GoalUpdate,
}

/// Handler for updating goals.
pub struct UpdateGoalHandler {
    repository: Arc<dyn GoalRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateGoalHandler {
    pub fn new(repository: Arc<dyn GoalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: UpdateGoalCommand) -> Result<Goal, GoalError> {
        let goal = load_goal(self.repository.as_ref(), cmd.goal_id).await?;

        if cmd.update.is_empty() {
            return Ok(goal);
        }

        let updated = goal.update(cmd.update, self.clock.now())?;
        self.repository.save(&updated).await?;

        tracing::debug!(goal_id = %updated.id(), "goal updated");
        Ok(updated)
    }
}
