//! # Feature: Command Cooldowns
//!
//! Stops a user from re-running commands of the same family too quickly.
//! Uses DashMap for thread-safe concurrent access; each (group, user) pair
//! has its own window.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Per-group cooldown windows keyed by (group, user_id)
//! - 1.0.0: Initial release with per-user sliding window rate limiting

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Command family sharing one cooldown window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownGroup {
    General,
    Anime,
    Waifu,
    Imsakiyah,
}

impl CooldownGroup {
    pub fn window(&self) -> Duration {
        match self {
            CooldownGroup::General => Duration::from_secs(3),
            CooldownGroup::Anime => Duration::from_secs(5),
            CooldownGroup::Waifu => Duration::from_secs(3),
            CooldownGroup::Imsakiyah => Duration::from_secs(5),
        }
    }

    /// Group a slash command belongs to
    pub fn for_command(name: &str) -> Self {
        match name {
            "anime" | "manga" | "character" | "topanime" | "topmanga" | "season"
            | "randomanime" => CooldownGroup::Anime,
            "waifu" | "randomwaifu" | "categories" => CooldownGroup::Waifu,
            "imsakiyah" => CooldownGroup::Imsakiyah,
            _ => CooldownGroup::General,
        }
    }
}

#[derive(Clone, Default)]
pub struct Cooldowns {
    last_use: Arc<DashMap<(CooldownGroup, u64), Instant>>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the cooldown for `user_id` at `now`.
    ///
    /// Returns the time left when the user is still cooling down; the
    /// window is not extended by a rejected attempt.
    pub fn check(&self, group: CooldownGroup, user_id: u64, now: Instant) -> Result<(), Duration> {
        match self.last_use.entry((group, user_id)) {
            Entry::Vacant(slot) => {
                slot.insert(now);
                Ok(())
            }
            Entry::Occupied(mut slot) => {
                let elapsed = now.saturating_duration_since(*slot.get());
                if elapsed < group.window() {
                    return Err(group.window() - elapsed);
                }
                slot.insert(now);
                Ok(())
            }
        }
    }

    /// Drop entries whose window has passed
    pub fn prune(&self, now: Instant) {
        self.last_use
            .retain(|(group, _), last| now.saturating_duration_since(*last) < group.window());
    }

    pub fn len(&self) -> usize {
        self.last_use.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_use.is_empty()
    }
}
