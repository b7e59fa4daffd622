//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers load a goal snapshot, apply one domain command and save
//! the returned snapshot. Query handlers only read.

pub mod handlers;

pub use handlers::{
    // Goal commands
    AddFeedbackCommand, AddFeedbackHandler, AddMilestoneCommand, AddMilestoneHandler,
    CreateGoalCommand, CreateGoalHandler, DeleteGoalCommand, DeleteGoalHandler,
    ToggleMilestoneCommand, ToggleMilestoneHandler, UpdateGoalCommand, UpdateGoalHandler,
    // Goal queries
    GetGoalAnalyticsHandler, GetGoalAnalyticsQuery, GetGoalHandler, GetGoalQuery,
    ListGoalsHandler, ListGoalsQuery,
    // Progress queries
    GetMonthlyRollupHandler, GetMonthlyRollupQuery, GetProgressSummaryHandler,
    GetProgressSummaryQuery, ProgressSummary,
};
