//! File-based activity store.
//!
//! Reads `<data_dir>/activities/<user_id>.json`, a flat JSON array of
//! activity records written by the host application.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::json_file::{read_array, user_file_name};
use crate::domain::activity::Activity;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ActivityStore;

/// JSON-file implementation of the ActivityStore port.
#[derive(Debug, Clone)]
pub struct FileActivityStore {
    activities_dir: PathBuf,
}

impl FileActivityStore {
    /// Create a store rooted at the data directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            activities_dir: data_dir.as_ref().join("activities"),
        }
    }
}

#[async_trait]
impl ActivityStore for FileActivityStore {
    async fn load_activities(&self, user_id: &UserId) -> Result<Vec<Activity>, DomainError> {
        let path = self.activities_dir.join(user_file_name(user_id));
        let mut activities: Vec<Activity> = read_array(&path).await?;

        let before = activities.len();
        activities.retain(|a| &a.user_id == user_id);
        if activities.len() != before {
            tracing::warn!(
                user_id = %user_id,
                dropped = before - activities.len(),
                "activity file held records of other users"
            );
        }

        tracing::debug!(user_id = %user_id, count = activities.len(), "activities loaded");
        Ok(activities)
    }
}
