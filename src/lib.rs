//! Scholar Track - Points, eligibility and goals for mentorship programs
//!
//! This crate turns activity and milestone records into point totals,
//! scholarship-eligibility tiers, goal progress and monthly rollups.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
