//! # Analytics Feature
//!
//! Command usage tracking.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod usage_tracker;

pub use usage_tracker::{CommandEvent, CommandLog, UsageTracker, UserStats};
