//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ActivityStore` - Read-only activity snapshots per user
//! - `PillarCatalog` - Pillar reference data per program period
//! - `GoalRepository` - Goal snapshot persistence
//! - `Clock` - Current time for handlers

mod activity_store;
mod clock;
mod goal_repository;
mod pillar_catalog;

pub use activity_store::ActivityStore;
pub use clock::Clock;
pub use goal_repository::GoalRepository;
pub use pillar_catalog::PillarCatalog;
