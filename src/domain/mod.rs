//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `activity` - Activity records and pillar reference data
//! - `progress` - Point totals, eligibility tiers and time-windowed rollups
//! - `goal` - Goal lifecycle with milestones and feedback

pub mod activity;
pub mod foundation;
pub mod goal;
pub mod progress;
