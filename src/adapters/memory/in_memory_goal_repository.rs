//! In-memory goal repository.
//!
//! Useful for:
//! - Development and testing environments
//! - Embedding the engine in a host that persists goals itself
//!
//! Does not persist data across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GoalId, UserId};
use crate::domain::goal::Goal;
use crate::ports::GoalRepository;

/// In-memory implementation of the GoalRepository port.
///
/// Writes take an exclusive lock, so concurrent saves of the same goal are
/// applied one after another and the last one wins.
#[derive(Default)]
pub struct InMemoryGoalRepository {
    goals: RwLock<HashMap<GoalId, Goal>>,
}

impl InMemoryGoalRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with goals.
    pub fn with_goals(goals: impl IntoIterator<Item = Goal>) -> Self {
        Self {
            goals: RwLock::new(goals.into_iter().map(|g| (*g.id(), g)).collect()),
        }
    }

    /// Returns the number of stored goals.
    pub async fn len(&self) -> usize {
        self.goals.read().await.len()
    }

    /// Returns true if no goals are stored.
    pub async fn is_empty(&self) -> bool {
        self.goals.read().await.is_empty()
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        self.goals.write().await.insert(*goal.id(), goal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        Ok(self.goals.read().await.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError> {
        let mut goals: Vec<Goal> = self
            .goals
            .read()
            .await
            .values()
            .filter(|g| g.is_owner(user_id))
            .cloned()
            .collect();
        goals.sort_by_key(|g| *g.created_at());
        Ok(goals)
    }

    async fn delete(&self, id: &GoalId) -> Result<bool, DomainError> {
        Ok(self.goals.write().await.remove(id).is_some())
    }
}
