//! Report configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::progress::{DEFAULT_TRAILING_MONTHS, MAX_TRAILING_MONTHS, MIN_TRAILING_MONTHS};

/// Settings for generated progress reports
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Months in the trailing rollup
    #[serde(default = "default_trailing_months")]
    pub trailing_months: usize,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_TRAILING_MONTHS..=MAX_TRAILING_MONTHS).contains(&self.trailing_months) {
            return Err(ValidationError::InvalidTrailingMonths {
                value: self.trailing_months,
                min: MIN_TRAILING_MONTHS,
                max: MAX_TRAILING_MONTHS,
            });
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trailing_months: default_trailing_months(),
        }
    }
}

fn default_trailing_months() -> usize {
    DEFAULT_TRAILING_MONTHS
}
