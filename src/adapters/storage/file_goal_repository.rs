//! File-based goal repository.
//!
//! Goals are kept as one JSON array per user at
//! `<data_dir>/goals/<user_id>.json`, each goal nesting its milestones and
//! feedback.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::error::StorageError;
use super::json_file::{list_json_files, read_array, remove_file, user_file_name, write_array};
use crate::domain::foundation::{DomainError, GoalId, UserId};
use crate::domain::goal::Goal;
use crate::ports::GoalRepository;

/// JSON-file implementation of the GoalRepository port.
///
/// Writes are serialized through a single lock so read-modify-write cycles on
/// a user's file never interleave within one process.
#[derive(Debug)]
pub struct FileGoalRepository {
    goals_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileGoalRepository {
    /// Create a repository rooted at the data directory.
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileGoalRepository::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            goals_dir: data_dir.as_ref().join("goals"),
            write_lock: Mutex::new(()),
        }
    }

    fn user_file(&self, user_id: &UserId) -> PathBuf {
        self.goals_dir.join(user_file_name(user_id))
    }

    /// Finds the file holding a goal, with that file's full contents.
    ///
    /// Unreadable files are skipped so one damaged user file does not hide
    /// every other user's goals.
    async fn locate(&self, id: &GoalId) -> Result<Option<(PathBuf, Vec<Goal>)>, StorageError> {
        for path in list_json_files(&self.goals_dir).await? {
            let goals: Vec<Goal> = match read_array(&path).await {
                Ok(goals) => goals,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable goal file");
                    continue;
                }
            };
            if goals.iter().any(|g| g.id() == id) {
                return Ok(Some((path, goals)));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl GoalRepository for FileGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let path = self.user_file(goal.user_id());

        let mut goals: Vec<Goal> = read_array(&path).await?;
        match goals.iter_mut().find(|g| g.id() == goal.id()) {
            Some(existing) => *existing = goal.clone(),
            None => goals.push(goal.clone()),
        }

        write_array(&path, &goals).await?;
        tracing::debug!(goal_id = %goal.id(), path = %path.display(), "goal saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        let found = self
            .locate(id)
            .await?
            .and_then(|(_, goals)| goals.into_iter().find(|g| g.id() == id));
        Ok(found)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError> {
        let mut goals: Vec<Goal> = read_array(&self.user_file(user_id)).await?;
        // Sanitized file names can collide; ownership is checked per goal.
        goals.retain(|g| g.is_owner(user_id));
        goals.sort_by_key(|g| *g.created_at());
        Ok(goals)
    }

    async fn delete(&self, id: &GoalId) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let Some((path, mut goals)) = self.locate(id).await? else {
            return Ok(false);
        };

        goals.retain(|g| g.id() != id);
        if goals.is_empty() {
            remove_file(&path).await?;
        } else {
            write_array(&path, &goals).await?;
        }

        tracing::debug!(goal_id = %id, path = %path.display(), "goal deleted");
        Ok(true)
    }
}
