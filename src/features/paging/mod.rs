//! # Feature: Paging
//!
//! Reusable paginated list with button navigation, shared by every browse
//! and search command (school directory, prayer-schedule cities, help).
//! Views are pure in-memory state; they never perform network I/O and never
//! call Discord directly. The interaction layer renders the returned
//! payloads.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Two-column layout, registry sweep for expired views
//! - 1.0.0: Initial implementation

pub mod buttons;
pub mod controls;
pub mod navigate;
pub mod search;
pub mod session;
pub mod view;

pub use buttons::{create_navigation_buttons, indicator_id, ControlSet};
pub use controls::{NavAction, NavigationControls};
pub use search::{sort_by_name, SearchFilter, SearchOutcome};
pub use session::{Lifecycle, ViewRegistry, ViewSession, ViewState};
pub use view::{
    Column, PageBody, PageLayout, PageTemplate, PagedListView, PagingError, Record, RenderPayload,
};
