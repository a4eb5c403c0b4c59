//! # Features
//!
//! Every bot feature lives in its own module with a version header.
//! `get_features()` lists them for the `/info` command.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Add shared paging, Last.fm and cooldowns
//! - 1.1.0: Add school directory and imsakiyah schedule
//! - 1.0.0: Initial anime and waifu features

pub mod analytics;
pub mod anime;
pub mod help;
pub mod i18n;
pub mod lastfm;
pub mod paging;
pub mod prayer;
pub mod rate_limiting;
pub mod schools;
pub mod settings;
pub mod waifu;

pub use analytics::{CommandLog, UsageTracker};
pub use i18n::Language;
pub use paging::{PagedListView, Record, RenderPayload, ViewRegistry};
pub use rate_limiting::{CooldownGroup, Cooldowns};
pub use settings::{GuildSettings, MemorySettingsStore, SettingsStore};

/// Metadata shown by `/info`
#[derive(Debug, Clone, Copy)]
pub struct FeatureInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub since: &'static str,
}

const FEATURES: &[FeatureInfo] = &[
    FeatureInfo { id: "paging", name: "Paging", version: "1.1.0", since: "1.0.0" },
    FeatureInfo { id: "anime", name: "Anime & Manga", version: "1.2.0", since: "1.0.0" },
    FeatureInfo { id: "waifu", name: "Waifu Images", version: "1.1.0", since: "1.0.0" },
    FeatureInfo { id: "lastfm", name: "Last.fm", version: "1.1.0", since: "1.2.0" },
    FeatureInfo { id: "schools", name: "Info Sekolah", version: "1.1.0", since: "1.1.0" },
    FeatureInfo { id: "prayer", name: "Jadwal Imsakiyah", version: "1.2.0", since: "1.1.0" },
    FeatureInfo { id: "help", name: "Help", version: "1.1.0", since: "1.0.0" },
    FeatureInfo { id: "settings", name: "Guild Settings", version: "1.0.0", since: "1.0.0" },
    FeatureInfo { id: "i18n", name: "Localized Text", version: "1.1.0", since: "1.0.0" },
    FeatureInfo { id: "analytics", name: "Usage Analytics", version: "2.0.0", since: "1.0.0" },
    FeatureInfo { id: "cooldowns", name: "Cooldowns", version: "2.0.0", since: "1.0.0" },
];

pub fn get_features() -> &'static [FeatureInfo] {
    FEATURES
}

pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_ids_are_unique() {
        let mut ids: Vec<&str> = get_features().iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), get_features().len());
    }

    #[test]
    fn test_bot_version_matches_package() {
        assert_eq!(get_bot_version(), "1.2.0");
    }
}
