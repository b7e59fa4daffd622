//! Pillar catalog port.
//!
//! Pillars are static reference data; the catalog is read-only.

use crate::domain::activity::Pillar;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Lookup of the point-earning pillars defined for each program period.
#[async_trait]
pub trait PillarCatalog: Send + Sync {
    /// Pillars defined for a program period, in catalog order.
    ///
    /// Returns an empty list for unknown periods.
    async fn pillars_for_period(&self, period: u32) -> Result<Vec<Pillar>, DomainError>;

    /// Every pillar in the catalog, in catalog order.
    async fn all_pillars(&self) -> Result<Vec<Pillar>, DomainError>;
}
