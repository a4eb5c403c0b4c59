//! Settings store abstraction and the in-memory implementation

use async_trait::async_trait;
use dashmap::DashMap;

/// Key-value settings scoped by guild
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, guild_id: u64, key: &str) -> Option<String>;

    async fn set(&self, guild_id: u64, key: &str, value: &str);
}

/// Process-lifetime store; settings are lost on restart
#[derive(Default)]
pub struct MemorySettingsStore {
    values: DashMap<(u64, String), String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, guild_id: u64, key: &str) -> Option<String> {
        self.values
            .get(&(guild_id, key.to_string()))
            .map(|value| value.clone())
    }

    async fn set(&self, guild_id: u64, key: &str, value: &str) {
        self.values
            .insert((guild_id, key.to_string()), value.to_string());
    }
}
