//! AddMilestoneHandler - Command handler for appending milestones.

use chrono::NaiveDate;
use std::sync::Arc;

use super::load_goal;
use crate::domain::foundation::GoalId;
use crate::domain::goal::{Goal, GoalError};
use crate::ports::{Clock, GoalRepository};

/// Command to add a milestone to a goal.
#[derive(Debug, Clone)]
pub struct AddMilestoneCommand {
    pub goal_id: GoalId,
    pub title: String,
    pub deadline: NaiveDate,
}

/// Handler for adding milestones.
pub struct AddMilestoneHandler {
    repository: Arc<dyn GoalRepository>,
    clock: Arc<dyn Clock>,
}

impl AddMilestoneHandler {
    pub fn new(repository: Arc<dyn GoalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Returns the goal snapshot including the new milestone, which is last.
    pub async fn handle(&self, cmd: AddMilestoneCommand) -> Result<Goal, GoalError> {
        let goal = load_goal(self.repository.as_ref(), cmd.goal_id).await?;

        let updated = goal.add_milestone(&cmd.title, cmd.deadline, self.clock.now())?;
        self.repository.save(&updated).await?;

        tracing::debug!(
            goal_id = %updated.id(),
            milestones = updated.milestones().len(),
            progress = updated.progress().value(),
            "milestone added"
        );
        Ok(updated)
    }
}
