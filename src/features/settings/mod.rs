//! # Feature: Guild Settings
//!
//! Per-guild key-value settings (command prefix, language) behind an
//! injectable store. Direct messages always use the defaults.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with in-memory store

pub mod store;

pub use store::{MemorySettingsStore, SettingsStore};

use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::features::i18n::Language;

pub const PREFIX_KEY: &str = "prefix";
pub const LANGUAGE_KEY: &str = "language";
pub const DEFAULT_PREFIX: &str = "!";
pub const MAX_PREFIX_LEN: usize = 5;

/// Typed access to guild settings over any `SettingsStore`
#[derive(Clone)]
pub struct GuildSettings {
    store: Arc<dyn SettingsStore>,
    default_prefix: String,
    default_language: Language,
}

impl GuildSettings {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self::with_defaults(store, DEFAULT_PREFIX.to_string(), Language::default())
    }

    pub fn with_defaults(
        store: Arc<dyn SettingsStore>,
        default_prefix: String,
        default_language: Language,
    ) -> Self {
        Self {
            store,
            default_prefix,
            default_language,
        }
    }

    pub async fn prefix(&self, guild_id: Option<u64>) -> String {
        match guild_id {
            Some(id) => self
                .store
                .get(id, PREFIX_KEY)
                .await
                .unwrap_or_else(|| self.default_prefix.clone()),
            None => self.default_prefix.clone(),
        }
    }

    /// Validate and store a new prefix: 1 to 5 characters, no whitespace
    pub async fn set_prefix(&self, guild_id: u64, prefix: &str) -> Result<String> {
        let prefix = prefix.trim();
        if prefix.is_empty()
            || prefix.chars().count() > MAX_PREFIX_LEN
            || prefix.chars().any(char::is_whitespace)
        {
            return Err(anyhow!("Invalid prefix: {prefix:?}"));
        }
        self.store.set(guild_id, PREFIX_KEY, prefix).await;
        Ok(prefix.to_string())
    }

    pub async fn language(&self, guild_id: Option<u64>) -> Language {
        match guild_id {
            Some(id) => self
                .store
                .get(id, LANGUAGE_KEY)
                .await
                .and_then(|code| Language::parse(&code))
                .unwrap_or(self.default_language),
            None => self.default_language,
        }
    }

    pub async fn set_language(&self, guild_id: u64, language: Language) {
        self.store.set(guild_id, LANGUAGE_KEY, language.code()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GuildSettings {
        GuildSettings::new(Arc::new(MemorySettingsStore::new()))
    }

    #[tokio::test]
    async fn test_defaults() {
        let settings = settings();
        assert_eq!(settings.prefix(Some(1)).await, "!");
        assert_eq!(settings.prefix(None).await, "!");
        assert_eq!(settings.language(Some(1)).await, Language::Id);
    }

    #[tokio::test]
    async fn test_set_prefix_per_guild() {
        let settings = settings();
        assert_eq!(settings.set_prefix(1, " ?? ").await.unwrap(), "??");
        assert_eq!(settings.prefix(Some(1)).await, "??");
        assert_eq!(settings.prefix(Some(2)).await, "!");
        assert_eq!(settings.prefix(None).await, "!");
    }

    #[tokio::test]
    async fn test_invalid_prefix_is_rejected() {
        let settings = settings();
        assert!(settings.set_prefix(1, "").await.is_err());
        assert!(settings.set_prefix(1, "toolong").await.is_err());
        assert!(settings.set_prefix(1, "a b").await.is_err());
        assert_eq!(settings.prefix(Some(1)).await, "!");
    }

    #[tokio::test]
    async fn test_language_per_guild() {
        let settings = settings();
        settings.set_language(7, Language::En).await;
        assert_eq!(settings.language(Some(7)).await, Language::En);
        assert_eq!(settings.language(Some(8)).await, Language::Id);
        assert_eq!(settings.language(None).await, Language::Id);
    }

    #[tokio::test]
    async fn test_custom_defaults() {
        let settings = GuildSettings::with_defaults(
            Arc::new(MemorySettingsStore::new()),
            "$".to_string(),
            Language::En,
        );
        assert_eq!(settings.prefix(None).await, "$");
        assert_eq!(settings.language(Some(3)).await, Language::En);
    }
}
