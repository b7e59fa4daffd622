//! Storage Adapters
//!
//! JSON-file implementations of the persistence ports.
//!
//! ## Layout
//!
//! ```text
//! <data_dir>/
//!   goals/<user_id>.json        # array of goals with nested milestones/feedback
//!   activities/<user_id>.json   # flat array of activity records
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileActivityStore, FileGoalRepository};
//!
//! let goals = FileGoalRepository::new("./data");
//! let activities = FileActivityStore::new("./data");
//! ```

mod error;
mod file_activity_store;
mod file_goal_repository;
mod json_file;

pub use error::StorageError;
pub use file_activity_store::FileActivityStore;
pub use file_goal_repository::FileGoalRepository;
