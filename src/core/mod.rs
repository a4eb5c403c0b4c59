//! # Core Module
//!
//! Configuration, HTTP helpers, embed builders and Discord length limits.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add shared HTTP helpers and page embeds
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod embeds;
pub mod http;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use embeds::{colors, error_embed, page_embed, success_embed, warning_embed};
pub use response::{
    truncate, truncate_for_embed, truncate_for_field, truncate_for_message, truncate_for_title,
    EMBED_LIMIT, FIELD_LIMIT, MESSAGE_LIMIT,
};
