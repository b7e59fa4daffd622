//! Goal aggregate entity.
//!
//! A goal owns its milestones and feedback. Every command takes the current
//! snapshot by reference and returns a new one; the input is never changed.
//!
//! # Invariants
//!
//! - `progress = round(100 * completed / total)` over milestones, 0 when there
//!   are none
//! - `status` is derived from `progress` after every milestone change and is
//!   never set directly
//! - feedback is append-only

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::GoalError;
use super::milestone::{Feedback, Milestone};
use super::status::{GoalCategory, GoalStatus};
use crate::domain::foundation::{
    FeedbackId, GoalId, MilestoneId, Percentage, Timestamp, UserId, ValidationError,
};

/// Maximum length for goal and milestone titles.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Maximum length for goal descriptions and feedback content.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// User-editable fields supplied when creating a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDetails {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub deadline: NaiveDate,
}

/// Partial update of a goal's editable fields.
///
/// Progress, status, milestones and feedback have no counterpart here and
/// cannot be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<GoalCategory>,
    pub deadline: Option<NaiveDate>,
}

impl GoalUpdate {
    /// Returns true if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.deadline.is_none()
    }
}

/// Goal aggregate - a tracked objective broken into milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredGoal")]
pub struct Goal {
    id: GoalId,
    user_id: UserId,
    title: String,
    description: String,
    category: GoalCategory,
    deadline: NaiveDate,
    status: GoalStatus,
    progress: Percentage,
    milestones: Vec<Milestone>,
    feedback: Vec<Feedback>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Persisted shape of a goal. Derived fields are recomputed on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredGoal {
    id: GoalId,
    user_id: UserId,
    title: String,
    description: String,
    category: GoalCategory,
    deadline: NaiveDate,
    #[serde(default)]
    milestones: Vec<Milestone>,
    #[serde(default)]
    feedback: Vec<Feedback>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<StoredGoal> for Goal {
    fn from(stored: StoredGoal) -> Self {
        let progress = Goal::progress_of(&stored.milestones);
        Goal {
            id: stored.id,
            user_id: stored.user_id,
            title: stored.title,
            description: stored.description,
            category: stored.category,
            deadline: stored.deadline,
            status: GoalStatus::from_progress(progress),
            progress,
            milestones: stored.milestones,
            feedback: stored.feedback,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

impl Goal {
    /// Create a new goal with no milestones.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title or description is blank or too long
    /// - `ValidationFailed` if the deadline is before `now`'s date
    pub fn create(
        id: GoalId,
        user_id: UserId,
        details: GoalDetails,
        now: Timestamp,
    ) -> Result<Self, GoalError> {
        let title = validate_text("title", &details.title, MAX_TITLE_LENGTH)?;
        let description = validate_text("description", &details.description, MAX_TEXT_LENGTH)?;
        if details.deadline < now.date() {
            return Err(ValidationError::in_past(
                "deadline",
                format!("{} is before {}", details.deadline, now.date()),
            )
            .into());
        }

        Ok(Self {
            id,
            user_id,
            title,
            description,
            category: details.category,
            deadline: details.deadline,
            status: GoalStatus::NotStarted,
            progress: Percentage::ZERO,
            milestones: Vec::new(),
            feedback: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> GoalCategory {
        self.category
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn status(&self) -> GoalStatus {
        self.status
    }

    pub fn progress(&self) -> Percentage {
        self.progress
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Looks up one of this goal's milestones.
    pub fn milestone(&self, id: &MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| &m.id == id)
    }

    /// Number of completed milestones.
    pub fn completed_milestone_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }

    /// Checks if the given user owns this goal.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new, incomplete milestone.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is blank or too long
    pub fn add_milestone(
        &self,
        title: &str,
        deadline: NaiveDate,
        now: Timestamp,
    ) -> Result<Goal, GoalError> {
        let title = validate_text("milestone_title", title, MAX_TITLE_LENGTH)?;

        let mut next = self.clone();
        next.milestones
            .push(Milestone::new(MilestoneId::new(), title, deadline));
        Ok(next.recomputed(now))
    }

    /// Flip the completion flag of one milestone.
    ///
    /// # Errors
    ///
    /// - `MilestoneNotFound` if the milestone is not part of this goal
    pub fn toggle_milestone(
        &self,
        milestone_id: &MilestoneId,
        now: Timestamp,
    ) -> Result<Goal, GoalError> {
        let position = self
            .milestones
            .iter()
            .position(|m| &m.id == milestone_id)
            .ok_or_else(|| GoalError::milestone_not_found(self.id, *milestone_id))?;

        let mut next = self.clone();
        next.milestones[position] = self.milestones[position].toggled();
        Ok(next.recomputed(now))
    }

    /// Append a feedback note. Progress and status are unaffected.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content or author is blank
    pub fn add_feedback(
        &self,
        content: &str,
        author: &str,
        now: Timestamp,
    ) -> Result<Goal, GoalError> {
        let content = validate_text("content", content, MAX_TEXT_LENGTH)?;
        let author = validate_text("author", author, MAX_TITLE_LENGTH)?;

        let mut next = self.clone();
        next.feedback.push(Feedback {
            id: FeedbackId::new(),
            content,
            author,
            created_at: now,
        });
        next.updated_at = now;
        Ok(next)
    }

    /// Apply a partial update to the editable fields.
    ///
    /// The deadline is not checked against the clock here, so goals whose
    /// deadline has already passed stay editable.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a supplied title or description is blank or too long
    pub fn update(&self, update: GoalUpdate, now: Timestamp) -> Result<Goal, GoalError> {
        if update.is_empty() {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        if let Some(title) = update.title {
            next.title = validate_text("title", &title, MAX_TITLE_LENGTH)?;
        }
        if let Some(description) = update.description {
            next.description = validate_text("description", &description, MAX_TEXT_LENGTH)?;
        }
        if let Some(category) = update.category {
            next.category = category;
        }
        if let Some(deadline) = update.deadline {
            next.deadline = deadline;
        }
        next.updated_at = now;
        Ok(next)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn progress_of(milestones: &[Milestone]) -> Percentage {
        let completed = milestones.iter().filter(|m| m.completed).count();
        Percentage::from_ratio(completed, milestones.len())
    }

    fn recomputed(mut self, now: Timestamp) -> Self {
        self.progress = Self::progress_of(&self.milestones);
        self.status = GoalStatus::from_progress(self.progress);
        self.updated_at = now;
        self
    }
}

/// Trims `value` and checks it is non-empty and at most `max_len` characters.
fn validate_text(field: &str, value: &str, max_len: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if trimmed.chars().count() > max_len {
        return Err(ValidationError::invalid_format(
            field,
            format!("must be {} characters or less", max_len),
        ));
    }
    Ok(trimmed.to_string())
}
