//! Goal-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, MilestoneId, ValidationError};

/// Goal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    /// Goal was not found.
    NotFound(GoalId),
    /// Milestone is not part of the goal.
    MilestoneNotFound {
        goal_id: GoalId,
        milestone_id: MilestoneId,
    },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl GoalError {
    pub fn not_found(id: GoalId) -> Self {
        GoalError::NotFound(id)
    }
    pub fn milestone_not_found(goal_id: GoalId, milestone_id: MilestoneId) -> Self {
        GoalError::MilestoneNotFound {
            goal_id,
            milestone_id,
        }
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GoalError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    /// Returns true for errors the caller should resolve by refreshing its
    /// snapshot rather than treating as fatal.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GoalError::NotFound(_) | GoalError::MilestoneNotFound { .. }
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GoalError::NotFound(_) => ErrorCode::GoalNotFound,
            GoalError::MilestoneNotFound { .. } => ErrorCode::MilestoneNotFound,
            GoalError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            GoalError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            GoalError::NotFound(id) => format!("Goal not found: {}", id),
            GoalError::MilestoneNotFound {
                goal_id,
                milestone_id,
            } => format!("Milestone {} not found in goal {}", milestone_id, goal_id),
            GoalError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            GoalError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for GoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GoalError {}

impl From<ValidationError> for GoalError {
    fn from(err: ValidationError) -> Self {
        GoalError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for GoalError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => GoalError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => GoalError::Infrastructure(err.to_string()),
        }
    }
}
