//! GetProgressSummaryHandler - Query handler for a student's point standing.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, Points, UserId};
use crate::domain::progress::{pillar_breakdown, total_points, EligibilityTier, PillarProgress};
use crate::ports::{ActivityStore, PillarCatalog};

/// Query for a progress summary.
#[derive(Debug, Clone)]
pub struct GetProgressSummaryQuery {
    pub user_id: UserId,
    /// Restrict totals to activities performed in this calendar year.
    pub year: Option<i32>,
    /// Restrict the pillar breakdown to one program period.
    pub period: Option<u32>,
}

impl GetProgressSummaryQuery {
    pub fn all_time(user_id: UserId) -> Self {
        Self {
            user_id,
            year: None,
            period: None,
        }
    }
}

/// Point total, eligibility and per-pillar standing for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub total_points: Points,
    pub tier: EligibilityTier,
    /// Points still needed for the next tier; absent at the top tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_to_next_tier: Option<Points>,
    pub pillars: Vec<PillarProgress>,
    pub activity_count: usize,
    pub accepted_count: usize,
}

/// Handler for progress summaries.
pub struct GetProgressSummaryHandler {
    activities: Arc<dyn ActivityStore>,
    catalog: Arc<dyn PillarCatalog>,
}

impl GetProgressSummaryHandler {
    pub fn new(activities: Arc<dyn ActivityStore>, catalog: Arc<dyn PillarCatalog>) -> Self {
        Self {
            activities,
            catalog,
        }
    }

    pub async fn handle(&self, query: GetProgressSummaryQuery) -> Result<ProgressSummary, DomainError> {
        let activities = self.activities.load_activities(&query.user_id).await?;
        let pillars = match query.period {
            Some(period) => self.catalog.pillars_for_period(period).await?,
            None => self.catalog.all_pillars().await?,
        };

        let total = total_points(&activities, query.year);
        let tier = EligibilityTier::for_points(total);

        tracing::debug!(
            user_id = %query.user_id,
            activities = activities.len(),
            total = total.value(),
            tier = %tier,
            "progress summary computed"
        );

        Ok(ProgressSummary {
            user_id: query.user_id,
            year: query.year,
            total_points: total,
            tier,
            points_to_next_tier: EligibilityTier::points_to_next(total),
            pillars: pillar_breakdown(&activities, &pillars, query.year),
            activity_count: activities.len(),
            accepted_count: activities.iter().filter(|a| a.is_accepted()).count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryActivityStore, InMemoryPillarCatalog};
    use crate::domain::activity::{Activity, ActivityStatus, Pillar};
    use crate::domain::foundation::{ActivityId, PillarId};
    use chrono::NaiveDate;

    fn activity(id: &str, pillar: &str, year: i32, status: ActivityStatus, points: f64) -> Activity {
        Activity {
            id: ActivityId::new(id).unwrap(),
            user_id: UserId::new("student-1").unwrap(),
            pillar_id: PillarId::new(pillar).unwrap(),
            period: 1,
            date_performed: NaiveDate::from_ymd_opt(year, 3, 15),
            status,
            approved_points: Some(Points::new(points)),
        }
    }

    fn pillar(id: &str, period: u32, per_year: f64) -> Pillar {
        Pillar {
            id: PillarId::new(id).unwrap(),
            name: id.to_string(),
            period,
            points_per_year: Points::new(per_year),
            duration: 1,
        }
    }

    fn handler() -> GetProgressSummaryHandler {
        let store = InMemoryActivityStore::with_activities(vec![
            activity("a", "service", 2022, ActivityStatus::Accepted, 10.0),
            activity("b", "service", 2023, ActivityStatus::Accepted, 20.0),
            activity("c", "research", 2023, ActivityStatus::Accepted, 30.0),
            activity("d", "research", 2023, ActivityStatus::Rejected, 40.0),
            activity("e", "service", 2023, ActivityStatus::Submitted, 50.0),
        ]);
        let catalog = InMemoryPillarCatalog::new(vec![
            pillar("service", 1, 40.0),
            pillar("research", 2, 20.0),
        ]);
        GetProgressSummaryHandler::new(Arc::new(store), Arc::new(catalog))
    }

    #[tokio::test]
    async fn all_time_summary_counts_only_accepted() {
        let summary = handler()
            .handle(GetProgressSummaryQuery::all_time(UserId::new("student-1").unwrap()))
            .await
            .unwrap();

        assert_eq!(summary.total_points.value(), 60.0);
        assert_eq!(summary.tier, EligibilityTier::None);
        assert_eq!(summary.points_to_next_tier.map(|p| p.value()), Some(10.0));
        assert_eq!(summary.activity_count, 5);
        assert_eq!(summary.accepted_count, 3);
        assert_eq!(summary.pillars.len(), 2);
        assert_eq!(summary.pillars[0].earned.value(), 30.0);
        // Earned beyond budget is reported raw, percentage is clamped.
        assert_eq!(summary.pillars[1].earned.value(), 30.0);
        assert_eq!(summary.pillars[1].percent_of_budget.value(), 100);
    }

    #[tokio::test]
    async fn year_filter_limits_total_and_breakdown() {
        let summary = handler()
            .handle(GetProgressSummaryQuery {
                user_id: UserId::new("student-1").unwrap(),
                year: Some(2023),
                period: None,
            })
            .await
            .unwrap();

        assert_eq!(summary.total_points.value(), 50.0);
        assert_eq!(summary.pillars[0].earned.value(), 20.0);
        assert_eq!(summary.pillars[0].percent_of_budget.value(), 50);
    }

    #[tokio::test]
    async fn period_filter_limits_pillars() {
        let summary = handler()
            .handle(GetProgressSummaryQuery {
                user_id: UserId::new("student-1").unwrap(),
                year: None,
                period: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(summary.pillars.len(), 1);
        assert_eq!(summary.pillars[0].pillar_id.as_str(), "research");
        // Totals are never restricted by period.
        assert_eq!(summary.total_points.value(), 60.0);
    }

    #[tokio::test]
    async fn user_without_activities_is_not_eligible() {
        let summary = handler()
            .handle(GetProgressSummaryQuery::all_time(UserId::new("nobody").unwrap()))
            .await
            .unwrap();

        assert_eq!(summary.total_points, Points::ZERO);
        assert_eq!(summary.tier, EligibilityTier::None);
        assert!(summary.pillars.iter().all(|p| p.earned == Points::ZERO));
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = ProgressSummary {
            user_id: UserId::new("student-1").unwrap(),
            year: None,
            total_points: Points::new(95.0),
            tier: EligibilityTier::Full,
            points_to_next_tier: None,
            pillars: vec![],
            activity_count: 0,
            accepted_count: 0,
        };

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["totalPoints"], 95.0);
        assert_eq!(json["tier"], "full");
        assert!(json.get("pointsToNextTier").is_none());
        assert!(json.get("year").is_none());
    }
}
