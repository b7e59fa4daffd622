//! Point aggregation over activity snapshots.
//!
//! All functions borrow their inputs and return derived values; the
//! activity records themselves are never modified.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::time_window::TimeWindow;
use crate::domain::activity::Activity;
use crate::domain::foundation::{PillarId, Points};

/// Sums accepted points, optionally restricted to one calendar year.
///
/// With a year filter, activities without a `date_performed` or dated in
/// another year are dropped first. Only accepted activities contribute.
/// An empty input yields zero.
pub fn total_points(activities: &[Activity], year_filter: Option<i32>) -> Points {
    activities
        .iter()
        .filter(|a| year_filter.map_or(true, |year| TimeWindow::year(year).contains_opt(a.date_performed)))
        .map(Activity::contribution)
        .sum()
}

/// Lazily yields activities performed in the same month and year as `reference`.
pub fn iter_monthly_activities<'a>(
    activities: &'a [Activity],
    reference: NaiveDate,
) -> impl Iterator<Item = &'a Activity> + 'a {
    let window = TimeWindow::month_of(reference);
    activities
        .iter()
        .filter(move |a| window.contains_opt(a.date_performed))
}

/// Activities performed in the same month and year as `reference`.
pub fn monthly_activities(activities: &[Activity], reference: NaiveDate) -> Vec<&Activity> {
    iter_monthly_activities(activities, reference).collect()
}

/// Groups activities by pillar, preserving input order within each group.
pub fn group_by_pillar<'a, I>(activities: I) -> BTreeMap<PillarId, Vec<&'a Activity>>
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut groups: BTreeMap<PillarId, Vec<&'a Activity>> = BTreeMap::new();
    for activity in activities {
        groups
            .entry(activity.pillar_id.clone())
            .or_default()
            .push(activity);
    }
    groups
}

/// Accepted points per pillar.
///
/// Pillars whose activities are all unaccepted still appear, with zero.
pub fn points_by_pillar<'a, I>(activities: I) -> BTreeMap<PillarId, Points>
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut totals: BTreeMap<PillarId, Points> = BTreeMap::new();
    for activity in activities {
        let entry = totals.entry(activity.pillar_id.clone()).or_default();
        *entry = *entry + activity.contribution();
    }
    totals
}
