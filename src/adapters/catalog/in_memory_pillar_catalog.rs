//! In-memory pillar catalog.

use async_trait::async_trait;

use crate::domain::activity::Pillar;
use crate::domain::foundation::DomainError;
use crate::ports::PillarCatalog;

/// Fixed list of pillars held in memory, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPillarCatalog {
    pillars: Vec<Pillar>,
}

impl InMemoryPillarCatalog {
    pub fn new(pillars: Vec<Pillar>) -> Self {
        Self { pillars }
    }

    /// A catalog with no pillars. Breakdowns come out empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }
}

#[async_trait]
impl PillarCatalog for InMemoryPillarCatalog {
    async fn pillars_for_period(&self, period: u32) -> Result<Vec<Pillar>, DomainError> {
        Ok(self
            .pillars
            .iter()
            .filter(|p| p.period == period)
            .cloned()
            .collect())
    }

    async fn all_pillars(&self) -> Result<Vec<Pillar>, DomainError> {
        Ok(self.pillars.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PillarId, Points};

    fn pillar(id: &str, period: u32) -> Pillar {
        Pillar {
            id: PillarId::new(id).unwrap(),
            name: id.to_uppercase(),
            period,
            points_per_year: Points::new(10.0),
            duration: 1,
        }
    }

    #[tokio::test]
    async fn filters_by_period_in_catalog_order() {
        let catalog = InMemoryPillarCatalog::new(vec![
            pillar("service", 1),
            pillar("research", 2),
            pillar("leadership", 1),
        ]);

        let period_one = catalog.pillars_for_period(1).await.unwrap();

        let ids: Vec<&str> = period_one.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["service", "leadership"]);
    }

    #[tokio::test]
    async fn unknown_period_is_empty() {
        let catalog = InMemoryPillarCatalog::new(vec![pillar("service", 1)]);
        assert!(catalog.pillars_for_period(7).await.unwrap().is_empty());
        assert_eq!(catalog.all_pillars().await.unwrap().len(), 1);
    }
}
