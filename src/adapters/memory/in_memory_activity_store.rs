//! In-memory activity store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::activity::Activity;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ActivityStore;

/// In-memory implementation of the ActivityStore port.
///
/// Activities are kept as one flat list; lookups filter by user.
#[derive(Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryActivityStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given activities.
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Adds an activity. Stands in for the submit/review flow of the host.
    pub async fn insert(&self, activity: Activity) {
        self.activities.write().await.push(activity);
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load_activities(&self, user_id: &UserId) -> Result<Vec<Activity>, DomainError> {
        Ok(self
            .activities
            .read()
            .await
            .iter()
            .filter(|a| &a.user_id == user_id)
            .cloned()
            .collect())
    }
}
