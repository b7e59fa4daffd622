//! In-memory adapters for development, tests and embedding.

mod in_memory_activity_store;
mod in_memory_goal_repository;

pub use in_memory_activity_store::InMemoryActivityStore;
pub use in_memory_goal_repository::InMemoryGoalRepository;
