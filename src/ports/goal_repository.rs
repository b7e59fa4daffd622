//! Goal repository port.
//!
//! Defines the contract for persisting goal snapshots.
//!
//! # Design
//!
//! - **Snapshot writes**: `save` stores the whole goal, including its
//!   milestones and feedback
//! - **Last writer wins**: implementations serialize writes per goal id but
//!   do not detect conflicting updates
//! - **User-scoped**: goals are stored and listed per owning user

use crate::domain::foundation::{DomainError, GoalId, UserId};
use crate::domain::goal::Goal;
use async_trait::async_trait;

/// Repository port for Goal aggregate persistence.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Insert or replace a goal.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Find a goal by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError>;

    /// Find all goals owned by a user, oldest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError>;

    /// Delete a goal together with its milestones and feedback.
    ///
    /// Returns `false` if no such goal existed.
    async fn delete(&self, id: &GoalId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn GoalRepository) {}
    }
}
