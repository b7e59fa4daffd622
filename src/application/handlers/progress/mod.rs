//! Progress query handlers.

mod get_monthly_rollup;
mod get_progress_summary;

pub use get_monthly_rollup::{GetMonthlyRollupHandler, GetMonthlyRollupQuery};
pub use get_progress_summary::{GetProgressSummaryHandler, GetProgressSummaryQuery, ProgressSummary};
