//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory goal repository and activity store
//! - `storage` - JSON files under a data directory
//! - `catalog` - Pillar catalogs (in-memory, YAML file)
//! - `clock` - System and fixed clocks

pub mod catalog;
pub mod clock;
pub mod memory;
pub mod storage;

pub use catalog::{load_pillar_catalog, parse_pillar_catalog, InMemoryPillarCatalog};
pub use clock::{FixedClock, SystemClock};
pub use memory::{InMemoryActivityStore, InMemoryGoalRepository};
pub use storage::{FileActivityStore, FileGoalRepository, StorageError};
