//! Pillar reference data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PillarId, Points};

/// A named, point-budgeted category of activity.
///
/// Pillars come from an external catalog and are never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub id: PillarId,
    pub name: String,
    /// Program period this pillar entry belongs to.
    pub period: u32,
    pub points_per_year: Points,
    /// Number of program years the pillar spans.
    pub duration: u32,
}

impl Pillar {
    /// Total point budget across the pillar's duration.
    pub fn total_budget(&self) -> Points {
        Points::new(self.points_per_year.value() * f64::from(self.duration))
    }
}
