//! Shared context for command handlers
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Data-source clients, guild settings and paged view registries
//! - 1.0.0: Initial implementation with core shared state

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::features::analytics::UsageTracker;
use crate::features::anime::JikanClient;
use crate::features::help::{HelpEntry, HelpViewContext};
use crate::features::i18n::Language;
use crate::features::lastfm::{AccountLinks, LastfmClient};
use crate::features::paging::ViewRegistry;
use crate::features::prayer::{City, CityViewContext, PrayerClient};
use crate::features::rate_limiting::Cooldowns;
use crate::features::schools::{School, SchoolClient, SchoolViewContext};
use crate::features::settings::{GuildSettings, MemorySettingsStore, SettingsStore};
use crate::features::waifu::WaifuClient;

/// Live paged views, one registry per feature
#[derive(Clone, Default)]
pub struct Views {
    pub schools: ViewRegistry<School, SchoolViewContext>,
    pub cities: ViewRegistry<City, CityViewContext>,
    pub help: ViewRegistry<HelpEntry, HelpViewContext>,
}

/// Shared context for all command and component handlers
#[derive(Clone)]
pub struct CommandContext {
    pub settings: GuildSettings,
    pub usage_tracker: UsageTracker,
    pub cooldowns: Cooldowns,
    pub schools: SchoolClient,
    pub prayer: PrayerClient,
    pub waifu: WaifuClient,
    pub jikan: JikanClient,
    /// `None` when no Last.fm API key is configured
    pub lastfm: Option<LastfmClient>,
    pub lastfm_links: AccountLinks,
    pub views: Views,
    pub owner_id: Option<u64>,
    pub start_time: Instant,
}

impl CommandContext {
    /// Build every client from `config` over an in-memory settings store
    pub fn from_config(config: &Config, usage_tracker: UsageTracker) -> Result<Self> {
        let store: Arc<dyn SettingsStore> = Arc::new(MemorySettingsStore::new());
        Self::with_store(config, store, usage_tracker)
    }

    pub fn with_store(
        config: &Config,
        store: Arc<dyn SettingsStore>,
        usage_tracker: UsageTracker,
    ) -> Result<Self> {
        let lastfm = config
            .lastfm_api_key
            .as_deref()
            .map(LastfmClient::new)
            .transpose()?;

        Ok(Self {
            settings: GuildSettings::with_defaults(
                store,
                config.default_prefix.clone(),
                config.default_language,
            ),
            usage_tracker,
            cooldowns: Cooldowns::new(),
            schools: SchoolClient::new()?,
            prayer: PrayerClient::new()?,
            waifu: WaifuClient::new()?,
            jikan: JikanClient::new()?,
            lastfm,
            lastfm_links: AccountLinks::new(),
            views: Views::default(),
            owner_id: config.owner_id,
            start_time: Instant::now(),
        })
    }

    pub async fn language(&self, guild_id: Option<u64>) -> Language {
        self.settings.language(guild_id).await
    }

    /// Owner-only commands are open to everyone when no owner is configured
    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_id.map_or(true, |owner| owner == user_id)
    }
}
