//! AddFeedbackHandler - Command handler for appending feedback notes.

use std::sync::Arc;

use super::load_goal;
use crate::domain::foundation::GoalId;
use crate::domain::goal::{Goal, GoalError};
use crate::ports::{Clock, GoalRepository};

/// Command to leave feedback on a goal.
#[derive(Debug, Clone)]
pub struct AddFeedbackCommand {
    pub goal_id: GoalId,
    pub content: String,
    pub author: String,
}

/// Handler for adding feedback.
pub struct AddFeedbackHandler {
    repository: Arc<dyn GoalRepository>,
    clock: Arc<dyn Clock>,
}

impl AddFeedbackHandler {
    pub fn new(repository: Arc<dyn GoalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: AddFeedbackCommand) -> Result<Goal, GoalError> {
        let goal = load_goal(self.repository.as_ref(), cmd.goal_id).await?;

        let updated = goal.add_feedback(&cmd.content, &cmd.author, self.clock.now())?;
        self.repository.save(&updated).await?;

        tracing::debug!(goal_id = %updated.id(), feedback = updated.feedback().len(), "feedback added");
        Ok(updated)
    }
}
