//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Scholar Track domain.

mod errors;
mod ids;
mod percentage;
mod points;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActivityId, FeedbackId, GoalId, MilestoneId, PillarId, UserId};
pub use percentage::Percentage;
pub use points::Points;
pub use timestamp::Timestamp;
