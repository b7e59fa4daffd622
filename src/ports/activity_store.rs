//! Activity store port (read side).
//!
//! The activity store owns activity records. The engine only ever reads a
//! snapshot of a user's activities at call time.

use crate::domain::activity::Activity;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Read-only access to persisted activity records.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Load every activity logged by a user.
    ///
    /// Returns an empty list for users without activities.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn load_activities(&self, user_id: &UserId) -> Result<Vec<Activity>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ActivityStore) {}
    }
}
