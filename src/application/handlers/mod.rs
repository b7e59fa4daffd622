//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod goal;
pub mod progress;

pub use goal::{
    AddFeedbackCommand, AddFeedbackHandler, AddMilestoneCommand, AddMilestoneHandler,
    CreateGoalCommand, CreateGoalHandler, DeleteGoalCommand, DeleteGoalHandler, GetGoalHandler,
    GetGoalQuery, GetGoalAnalyticsHandler, GetGoalAnalyticsQuery, ListGoalsHandler,
    ListGoalsQuery, ToggleMilestoneCommand, ToggleMilestoneHandler, UpdateGoalCommand,
    UpdateGoalHandler,
};
pub use progress::{
    GetMonthlyRollupHandler, GetMonthlyRollupQuery, GetProgressSummaryHandler,
    GetProgressSummaryQuery, ProgressSummary,
};
