//! # Rate Limiting Feature
//!
//! Per-user command cooldowns, grouped by command family.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Replace sliding-window limiter with per-group cooldowns

pub mod cooldown;

pub use cooldown::{CooldownGroup, Cooldowns};
