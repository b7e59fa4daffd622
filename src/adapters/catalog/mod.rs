//! Pillar catalog adapters.

mod in_memory_pillar_catalog;
mod yaml_pillar_catalog;

pub use in_memory_pillar_catalog::InMemoryPillarCatalog;
pub use yaml_pillar_catalog::{load_pillar_catalog, parse_pillar_catalog};
