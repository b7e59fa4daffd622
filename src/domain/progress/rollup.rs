//! Month-by-month rollups for charting.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use super::aggregator::points_by_pillar;
use super::time_window::TimeWindow;
use crate::domain::activity::Activity;
use crate::domain::foundation::{PillarId, Points};

/// Default number of months in a trailing rollup.
pub const DEFAULT_TRAILING_MONTHS: usize = 9;

/// Smallest accepted rollup window.
pub const MIN_TRAILING_MONTHS: usize = 1;

/// Largest rollup window; longer requests are cut to this length.
pub const MAX_TRAILING_MONTHS: usize = 24;

/// Activity figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    /// Accepted points earned in the month.
    pub total: Points,
    /// Accepted points per pillar, for every pillar with activity in the month.
    pub by_pillar: BTreeMap<PillarId, Points>,
    /// Activities performed in the month, regardless of review status.
    pub activity_count: usize,
}

impl MonthlyBucket {
    /// Label such as `2024-03`.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// Builds one bucket per month for the `months` months ending with the
/// month of `reference`, oldest first.
///
/// Months without activity produce empty buckets so chart axes stay
/// contiguous. A zero-length window yields no buckets, and windows longer
/// than [`MAX_TRAILING_MONTHS`] are cut to that length.
pub fn trailing_monthly_rollup(
    activities: &[Activity],
    reference: NaiveDate,
    months: usize,
) -> Vec<MonthlyBucket> {
    let months = months.min(MAX_TRAILING_MONTHS);
    (0..months)
        .rev()
        .map(|back| bucket_for(activities, months_before(reference, back)))
        .collect()
}

/// Year and month `back` calendar months before the month of `reference`.
fn months_before(reference: NaiveDate, back: usize) -> (i32, u32) {
    // Bounded by MAX_TRAILING_MONTHS, so the cast cannot truncate.
    let index = reference.year() * 12 + reference.month0() as i32 - back as i32;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn bucket_for(activities: &[Activity], (year, month): (i32, u32)) -> MonthlyBucket {
    let window = TimeWindow::Month { year, month };
    let in_month: Vec<&Activity> = activities
        .iter()
        .filter(|a| window.contains_opt(a.date_performed))
        .collect();
    let by_pillar = points_by_pillar(in_month.iter().copied());
    let total = by_pillar.values().sum();

    MonthlyBucket {
        year,
        month,
        total,
        by_pillar,
        activity_count: in_month.len(),
    }
}
