//! Progress domain module.
//!
//! Pure functions that reduce activity snapshots into point totals,
//! eligibility tiers, per-pillar breakdowns and monthly rollups.
//!
//! - `time_window` - calendar year / month predicates
//! - `aggregator` - point totals and per-pillar grouping
//! - `eligibility` - point total to scholarship tier
//! - `rollup` - trailing month-by-month buckets
//! - `breakdown` - earned points joined with the pillar catalog

mod aggregator;
mod breakdown;
mod eligibility;
mod rollup;
mod time_window;

pub use aggregator::{
    group_by_pillar, iter_monthly_activities, monthly_activities, points_by_pillar, total_points,
};
pub use breakdown::{pillar_breakdown, PillarProgress};
pub use eligibility::{tier, EligibilityTier, FULL_THRESHOLD, PRORATED_THRESHOLD};
pub use rollup::{
    trailing_monthly_rollup, MonthlyBucket, DEFAULT_TRAILING_MONTHS, MAX_TRAILING_MONTHS,
    MIN_TRAILING_MONTHS,
};
pub use time_window::{in_same_month, in_year, TimeWindow};
