//! DeleteGoalHandler - Command handler for removing goals.

use std::sync::Arc;

use crate::domain::foundation::GoalId;
use crate::domain::goal::GoalError;
use crate::ports::GoalRepository;

/// Command to delete a goal with its milestones and feedback.
#[derive(Debug, Clone)]
pub struct DeleteGoalCommand {
    pub goal_id: GoalId,
}

/// Handler for deleting goals.
pub struct DeleteGoalHandler {
    repository: Arc<dyn GoalRepository>,
}

impl DeleteGoalHandler {
    pub fn new(repository: Arc<dyn GoalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteGoalCommand) -> Result<(), GoalError> {
        if !self.repository.delete(&cmd.goal_id).await? {
            return Err(GoalError::not_found(cmd.goal_id));
        }

        tracing::info!(goal_id = %cmd.goal_id, "goal deleted");
        Ok(())
    }
}
