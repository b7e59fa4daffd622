//! Goal command and query handlers.

mod add_feedback;
mod add_milestone;
mod create_goal;
mod delete_goal;
mod get_goal;
mod get_goal_analytics;
mod list_goals;
mod toggle_milestone;
mod update_goal;

pub use add_feedback::{AddFeedbackCommand, AddFeedbackHandler};
pub use add_milestone::{AddMilestoneCommand, AddMilestoneHandler};
pub use create_goal::{CreateGoalCommand, CreateGoalHandler};
pub use delete_goal::{DeleteGoalCommand, DeleteGoalHandler};
pub use get_goal::{GetGoalHandler, GetGoalQuery};
pub use get_goal_analytics::{GetGoalAnalyticsHandler, GetGoalAnalyticsQuery};
pub use list_goals::{ListGoalsHandler, ListGoalsQuery};
pub use toggle_milestone::{ToggleMilestoneCommand, ToggleMilestoneHandler};
pub use update_goal::{UpdateGoalCommand, UpdateGoalHandler};

use crate::domain::foundation::GoalId;
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalRepository;

/// Loads a goal or fails with `NotFound`.
async fn load_goal(repository: &dyn GoalRepository, goal_id: GoalId) -> Result<Goal, GoalError> {
    repository
        .find_by_id(&goal_id)
        .await?
        .ok_or_else(|| GoalError::not_found(goal_id))
}
