//! GetMonthlyRollupHandler - Query handler for month-by-month chart data.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::{
    trailing_monthly_rollup, MonthlyBucket, DEFAULT_TRAILING_MONTHS, MAX_TRAILING_MONTHS,
    MIN_TRAILING_MONTHS,
};
use crate::ports::{ActivityStore, Clock};

/// Query for a trailing monthly rollup.
#[derive(Debug, Clone)]
pub struct GetMonthlyRollupQuery {
    pub user_id: UserId,
    /// Last month of the window; defaults to the clock's current date.
    pub reference_date: Option<NaiveDate>,
    /// Window length; defaults to the handler's configured length.
    pub months: Option<usize>,
}

impl GetMonthlyRollupQuery {
    /// Rollup ending this month with the configured window length.
    pub fn current(user_id: UserId) -> Self {
        Self {
            user_id,
            reference_date: None,
            months: None,
        }
    }
}

/// Handler for monthly rollups.
pub struct GetMonthlyRollupHandler {
    activities: Arc<dyn ActivityStore>,
    clock: Arc<dyn Clock>,
    default_months: usize,
}

impl GetMonthlyRollupHandler {
    pub fn new(activities: Arc<dyn ActivityStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            activities,
            clock,
            default_months: DEFAULT_TRAILING_MONTHS,
        }
    }

    /// Overrides the window length used when a query does not set one.
    pub fn with_default_months(mut self, months: usize) -> Self {
        self.default_months = months;
        self
    }

    /// Returns buckets oldest first, ending with the reference month.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the query asks for a window outside
    ///   `MIN_TRAILING_MONTHS..=MAX_TRAILING_MONTHS`
    pub async fn handle(&self, query: GetMonthlyRollupQuery) -> Result<Vec<MonthlyBucket>, DomainError> {
        if let Some(months) = query.months {
            if !(MIN_TRAILING_MONTHS..=MAX_TRAILING_MONTHS).contains(&months) {
                return Err(DomainError::validation(
                    "months",
                    format!(
                        "Rollup window must be between {} and {} months, got {}",
                        MIN_TRAILING_MONTHS, MAX_TRAILING_MONTHS, months
                    ),
                ));
            }
        }

        let activities = self.activities.load_activities(&query.user_id).await?;
        let reference = query.reference_date.unwrap_or_else(|| self.clock.today());
        let months = query.months.unwrap_or(self.default_months);

        let buckets = trailing_monthly_rollup(&activities, reference, months);
        tracing::debug!(
            user_id = %query.user_id,
            reference = %reference,
            months = buckets.len(),
            "monthly rollup computed"
        );
        Ok(buckets)
    }
}
