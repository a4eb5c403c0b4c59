// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// Component and modal routing for paged views and selects
pub mod message_components;

// Background expiry of paged views
pub mod view_sweeper;

// Application layer
pub mod command_handler;
pub mod commands;

pub use core::Config;

pub use features::{
    // Analytics
    CommandLog, UsageTracker,
    // Localization
    Language,
    // Paging
    PagedListView, Record, RenderPayload, ViewRegistry,
    // Cooldowns
    CooldownGroup, Cooldowns,
    // Settings
    GuildSettings, MemorySettingsStore, SettingsStore,
};
