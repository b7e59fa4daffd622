//! Integration tests for the goal lifecycle.
//!
//! These tests drive the public handlers end to end:
//! 1. A goal is created with no milestones
//! 2. Milestones are added and toggled, moving progress and status
//! 3. Feedback is appended without touching progress
//! 4. Analytics and deletion see the stored snapshots
//!
//! Uses in-memory adapters and a fixed clock.

use chrono::NaiveDate;
use std::sync::Arc;

use scholar_track::adapters::{FixedClock, InMemoryGoalRepository};
use scholar_track::application::{
    AddFeedbackCommand, AddFeedbackHandler, AddMilestoneCommand, AddMilestoneHandler,
    CreateGoalCommand, CreateGoalHandler, DeleteGoalCommand, DeleteGoalHandler,
    GetGoalAnalyticsHandler, GetGoalAnalyticsQuery, GetGoalHandler, GetGoalQuery,
    ToggleMilestoneCommand, ToggleMilestoneHandler,
};
use scholar_track::domain::foundation::UserId;
use scholar_track::domain::goal::{GoalCategory, GoalError, GoalStatus};
use scholar_track::ports::{Clock, GoalRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Harness {
    clock: Arc<FixedClock>,
    create: CreateGoalHandler,
    add_milestone: AddMilestoneHandler,
    toggle: ToggleMilestoneHandler,
    add_feedback: AddFeedbackHandler,
    get: GetGoalHandler,
    analytics: GetGoalAnalyticsHandler,
    delete: DeleteGoalHandler,
}

impl Harness {
    fn new() -> Self {
        let repo: Arc<dyn GoalRepository> = Arc::new(InMemoryGoalRepository::new());
        let clock = Arc::new(FixedClock::on(date(2024, 1, 15)));
        let dyn_clock: Arc<dyn Clock> = clock.clone();

        Self {
            create: CreateGoalHandler::new(repo.clone(), dyn_clock.clone()),
            add_milestone: AddMilestoneHandler::new(repo.clone(), dyn_clock.clone()),
            toggle: ToggleMilestoneHandler::new(repo.clone(), dyn_clock.clone()),
            add_feedback: AddFeedbackHandler::new(repo.clone(), dyn_clock),
            get: GetGoalHandler::new(repo.clone()),
            analytics: GetGoalAnalyticsHandler::new(repo.clone()),
            delete: DeleteGoalHandler::new(repo),
            clock,
        }
    }
}

fn student() -> UserId {
    UserId::new("student-42").unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn goal_progresses_through_milestones_and_back() {
    let h = Harness::new();

    let goal = h
        .create
        .handle(CreateGoalCommand {
            user_id: student(),
            title: "Win the science fair".to_string(),
            description: "Build and present a project".to_string(),
            category: GoalCategory::Academic,
            deadline: date(2024, 5, 1),
        })
        .await
        .unwrap();
    assert_eq!(goal.progress().value(), 0);
    assert_eq!(goal.status(), GoalStatus::NotStarted);

    for (title, deadline) in [("Pick a topic", date(2024, 2, 1)), ("Build prototype", date(2024, 4, 1))] {
        h.add_milestone
            .handle(AddMilestoneCommand {
                goal_id: *goal.id(),
                title: title.to_string(),
                deadline,
            })
            .await
            .unwrap();
    }
    let goal = h.get.handle(GetGoalQuery { goal_id: *goal.id() }).await.unwrap();
    assert_eq!(goal.milestones().len(), 2);
    assert_eq!(goal.completed_milestone_count(), 0);
    assert_eq!(goal.progress().value(), 0);

    let first = goal.milestones()[0].id;
    let second = goal.milestones()[1].id;

    h.clock.advance_days(10);
    let goal = h
        .toggle
        .handle(ToggleMilestoneCommand { goal_id: *goal.id(), milestone_id: first })
        .await
        .unwrap();
    assert_eq!(goal.progress().value(), 50);
    assert_eq!(goal.status(), GoalStatus::InProgress);
    assert_eq!(goal.updated_at().date(), date(2024, 1, 25));

    let goal = h
        .toggle
        .handle(ToggleMilestoneCommand { goal_id: *goal.id(), milestone_id: second })
        .await
        .unwrap();
    assert_eq!(goal.progress().value(), 100);
    assert_eq!(goal.status(), GoalStatus::Completed);

    let goal = h
        .toggle
        .handle(ToggleMilestoneCommand { goal_id: *goal.id(), milestone_id: first })
        .await
        .unwrap();
    assert_eq!(goal.progress().value(), 50);
    assert_eq!(goal.status(), GoalStatus::InProgress);

    let stored = h.get.handle(GetGoalQuery { goal_id: *goal.id() }).await.unwrap();
    assert_eq!(stored, goal);
}

#[tokio::test]
async fn feedback_is_appended_in_order() {
    let h = Harness::new();
    let goal = h
        .create
        .handle(CreateGoalCommand {
            user_id: student(),
            title: "Mentor a freshman".to_string(),
            description: "Meet every two weeks".to_string(),
            category: GoalCategory::Personal,
            deadline: date(2024, 12, 1),
        })
        .await
        .unwrap();

    for (content, author) in [("Good plan", "Mentor"), ("First meeting done", "Student")] {
        h.add_feedback
            .handle(AddFeedbackCommand {
                goal_id: *goal.id(),
                content: content.to_string(),
                author: author.to_string(),
            })
            .await
            .unwrap();
    }

    let goal = h.get.handle(GetGoalQuery { goal_id: *goal.id() }).await.unwrap();
    let authors: Vec<&str> = goal.feedback().iter().map(|f| f.author.as_str()).collect();
    assert_eq!(authors, vec!["Mentor", "Student"]);
    assert_eq!(goal.status(), GoalStatus::NotStarted);
}

#[tokio::test]
async fn analytics_and_delete_see_stored_goals() {
    let h = Harness::new();

    let empty = h
        .analytics
        .handle(GetGoalAnalyticsQuery { user_id: student() })
        .await
        .unwrap();
    assert_eq!(empty.average_progress, None);

    let mut ids = Vec::new();
    for category in [GoalCategory::Career, GoalCategory::Career, GoalCategory::Professional] {
        let goal = h
            .create
            .handle(CreateGoalCommand {
                user_id: student(),
                title: "Goal".to_string(),
                description: "Details".to_string(),
                category,
                deadline: date(2024, 6, 1),
            })
            .await
            .unwrap();
        ids.push(*goal.id());
    }

    let analytics = h
        .analytics
        .handle(GetGoalAnalyticsQuery { user_id: student() })
        .await
        .unwrap();
    assert_eq!(analytics.total_goals, 3);
    assert_eq!(analytics.not_started, 3);
    assert_eq!(analytics.by_category.get(&GoalCategory::Career), Some(&2));
    assert_eq!(analytics.average_progress.map(|p| p.value()), Some(0));

    h.delete
        .handle(DeleteGoalCommand { goal_id: ids[0] })
        .await
        .unwrap();
    let err = h
        .get
        .handle(GetGoalQuery { goal_id: ids[0] })
        .await
        .unwrap_err();
    assert!(matches!(err, GoalError::NotFound(_)));

    let err = h
        .delete
        .handle(DeleteGoalCommand { goal_id: ids[0] })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn creating_with_past_deadline_fails() {
    let h = Harness::new();

    let err = h
        .create
        .handle(CreateGoalCommand {
            user_id: student(),
            title: "Too late".to_string(),
            description: "Already over".to_string(),
            category: GoalCategory::Career,
            deadline: date(2024, 1, 14),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, GoalError::ValidationFailed { .. }));
}
