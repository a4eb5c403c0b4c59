//! # Feature: Info Sekolah
//!
//! Indonesian school directory: browse by level, search by name, look up
//! by NPSN. Results are shown in a paged view with a random tip in the
//! footer.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Move list rendering onto the shared paging view
//! - 1.0.0: Initial implementation

pub mod client;
pub mod display;
pub mod types;

pub use client::{parse_schools, SchoolClient};
pub use display::{SchoolSession, SchoolViewContext};
pub use types::{School, SchoolType};
