//! Goal domain module.
//!
//! Goals, their milestones and feedback, plus the single place where a
//! goal's status is derived from its milestone progress.

mod aggregate;
mod analytics;
mod errors;
mod milestone;
mod status;

pub use aggregate::{Goal, GoalDetails, GoalUpdate, MAX_TEXT_LENGTH, MAX_TITLE_LENGTH};
pub use analytics::GoalAnalytics;
pub use errors::GoalError;
pub use milestone::{Feedback, Milestone};
pub use status::{GoalCategory, GoalStatus};
