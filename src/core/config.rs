//! Environment configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::{anyhow, Result};

use crate::features::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Register commands in this guild only (development)
    pub discord_guild_id: Option<String>,
    pub log_level: String,
    pub lastfm_api_key: Option<String>,
    /// When set, only this user may run owner-only commands
    pub owner_id: Option<u64>,
    pub default_prefix: String,
    pub default_language: Language,
    pub view_sweep_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let discord_token = get("DISCORD_TOKEN")
            .ok_or_else(|| anyhow!("DISCORD_TOKEN environment variable is required"))?;

        let owner_id = match get("OWNER_ID") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => None,
                Ok(id) => Some(id),
                Err(_) => return Err(anyhow!("OWNER_ID must be a numeric user id, got {raw:?}")),
            },
            None => None,
        };

        let default_language = match get("DEFAULT_LANGUAGE") {
            Some(code) => Language::parse(&code)
                .ok_or_else(|| anyhow!("DEFAULT_LANGUAGE must be 'id' or 'en', got {code:?}"))?,
            None => Language::default(),
        };

        let view_sweep_interval_secs = match get("VIEW_SWEEP_INTERVAL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| anyhow!("VIEW_SWEEP_INTERVAL_SECS must be a positive integer"))?,
            None => 15,
        };

        Ok(Config {
            discord_token,
            discord_guild_id: get("DISCORD_GUILD_ID"),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            lastfm_api_key: get("LASTFM_API_KEY"),
            owner_id,
            default_prefix: get("DEFAULT_PREFIX").unwrap_or_else(|| "!".to_string()),
            default_language,
            view_sweep_interval_secs,
        })
    }
}
