//! Activity module.
//!
//! Read-only records supplied by the activity store and the pillar catalog.
//! Nothing in this module is mutated by the engine.

mod pillar;
mod record;

pub use pillar::Pillar;
pub use record::{Activity, ActivityStatus};
