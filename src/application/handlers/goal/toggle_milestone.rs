//! ToggleMilestoneHandler - Command handler for completing/reopening milestones.

use std::sync::Arc;

use super::load_goal;
use crate::domain::foundation::{GoalId, MilestoneId};
use crate::domain::goal::{Goal, GoalError};
use crate::ports::{Clock, GoalRepository};

/// Command to flip a milestone's completion flag.
#[derive(Debug, Clone)]
pub struct ToggleMilestoneCommand {
    pub goal_id: GoalId,
    pub milestone_id: MilestoneId,
}

/// Handler for toggling milestones.
pub struct ToggleMilestoneHandler {
    repository: Arc<dyn GoalRepository>,
    clock: Arc<dyn Clock>,
}

impl ToggleMilestoneHandler {
    pub fn new(repository: Arc<dyn GoalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: ToggleMilestoneCommand) -> Result<Goal, GoalError> {
        let goal = load_goal(self.repository.as_ref(), cmd.goal_id).await?;

        let updated = goal.toggle_milestone(&cmd.milestone_id, self.clock.now())?;
        self.repository.save(&updated).await?;

        if updated.status() != goal.status() {
            tracing::info!(
                goal_id = %updated.id(),
                from = ?goal.status(),
                to = ?updated.status(),
                "goal status changed"
            );
        }
        Ok(updated)
    }
}
