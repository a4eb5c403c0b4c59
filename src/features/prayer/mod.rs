//! # Feature: Jadwal Imsakiyah
//!
//! Ramadan prayer schedule per city. Cities are grouped into regions by
//! keyword and browsed in a paged view with a two-column layout, a search
//! modal and a home button back to the region menu. The feed is optional:
//! a built-in city list and a generated schedule stand in when it fails.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Whole-word region keywords, shared paging view
//! - 1.1.0: Search modal and two-column layout
//! - 1.0.0: Initial implementation

pub mod cities;
pub mod client;
pub mod display;
pub mod regions;
pub mod schedule;

pub use cities::{find_city, City};
pub use client::PrayerClient;
pub use display::{CitySession, CityViewContext};
pub use regions::{cities_in, classify, group_by_region, Region};
pub use schedule::{wib_today, DaySchedule, MonthSchedule};
