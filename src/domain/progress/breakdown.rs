//! Per-pillar progress joined against the pillar catalog.

use serde::Serialize;

use super::aggregator::points_by_pillar;
use super::time_window::TimeWindow;
use crate::domain::activity::{Activity, Pillar};
use crate::domain::foundation::{Percentage, PillarId, Points};

/// Earned points for one pillar compared with its budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarProgress {
    pub pillar_id: PillarId,
    pub name: String,
    /// Accepted points earned; not clamped to the budget.
    pub earned: Points,
    /// `points_per_year * duration`.
    pub budget: Points,
    /// Share of the budget earned, clamped to 100 for display.
    pub percent_of_budget: Percentage,
}

/// Builds one entry per catalog pillar, in catalog order.
///
/// Activities for pillars missing from the catalog are ignored here; they
/// still count toward [`total_points`](super::total_points).
pub fn pillar_breakdown(
    activities: &[Activity],
    pillars: &[Pillar],
    year_filter: Option<i32>,
) -> Vec<PillarProgress> {
    let earned = points_by_pillar(
        activities
            .iter()
            .filter(|a| year_filter.map_or(true, |y| TimeWindow::year(y).contains_opt(a.date_performed))),
    );

    pillars
        .iter()
        .map(|pillar| {
            let earned = earned.get(&pillar.id).copied().unwrap_or(Points::ZERO);
            let budget = pillar.total_budget();
            PillarProgress {
                pillar_id: pillar.id.clone(),
                name: pillar.name.clone(),
                earned,
                budget,
                percent_of_budget: Percentage::from_fraction(earned.value(), budget.value()),
            }
        })
        .collect()
}
