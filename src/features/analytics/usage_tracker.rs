//! # Feature: Command Usage Tracking
//!
//! Counts command invocations per command and per user without blocking
//! the interaction that triggered them.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Track slash and prefix command usage in an in-memory log
//! - 1.0.0: Initial release with async background logging

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One command invocation
#[derive(Debug, Clone)]
pub struct CommandEvent {
    pub user_id: u64,
    pub guild_id: Option<u64>,
    pub command: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub commands_used: u64,
    pub last_command: String,
    pub last_command_time: DateTime<Utc>,
}

/// Aggregated usage counters, shared between the tracker task and readers
#[derive(Clone, Default)]
pub struct CommandLog {
    counts: Arc<DashMap<String, u64>>,
    users: Arc<DashMap<u64, UserStats>>,
    total: Arc<AtomicU64>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: &CommandEvent) {
        *self.counts.entry(event.command.clone()).or_insert(0) += 1;

        self.users
            .entry(event.user_id)
            .and_modify(|stats| {
                stats.commands_used += 1;
                stats.last_command = event.command.clone();
                stats.last_command_time = event.timestamp;
            })
            .or_insert_with(|| UserStats {
                commands_used: 1,
                last_command: event.command.clone(),
                last_command_time: event.timestamp,
            });

        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self, command: &str) -> u64 {
        self.counts.get(command).map(|c| *c).unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn user(&self, user_id: u64) -> Option<UserStats> {
        self.users.get(&user_id).map(|s| s.clone())
    }

    pub fn unique_users(&self) -> usize {
        self.users.len()
    }

    /// Most used commands, highest count first, ties by name
    pub fn top_commands(&self, limit: usize) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(limit);
        counts
    }
}

/// Queues usage events to a background task that folds them into a `CommandLog`
#[derive(Clone)]
pub struct UsageTracker {
    sender: mpsc::UnboundedSender<CommandEvent>,
    log: CommandLog,
}

impl UsageTracker {
    /// Create a tracker and spawn its background task. Requires a Tokio runtime.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let log = CommandLog::new();

        tokio::spawn(Self::background_logger(log.clone(), receiver));

        UsageTracker { sender, log }
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    /// Log a command invocation (non-blocking)
    pub fn log_command(&self, user_id: u64, guild_id: Option<u64>, command: &str) {
        let event = CommandEvent {
            user_id,
            guild_id,
            command: command.to_string(),
            timestamp: Utc::now(),
        };

        if let Err(e) = self.sender.send(event) {
            warn!("Failed to queue command usage event: {e}");
        }
    }

    async fn background_logger(log: CommandLog, mut receiver: mpsc::UnboundedReceiver<CommandEvent>) {
        while let Some(event) = receiver.recv().await {
            log.record(&event);
            debug!(
                "Logged command usage: /{} by {} (guild: {:?})",
                event.command, event.user_id, event.guild_id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn event(user_id: u64, command: &str) -> CommandEvent {
        CommandEvent {
            user_id,
            guild_id: Some(1),
            command: command.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_record_counts() {
        let log = CommandLog::new();
        log.record(&event(1, "ping"));
        log.record(&event(1, "ping"));
        log.record(&event(2, "waifu"));

        assert_eq!(log.count("ping"), 2);
        assert_eq!(log.count("waifu"), 1);
        assert_eq!(log.count("missing"), 0);
        assert_eq!(log.total(), 3);
        assert_eq!(log.unique_users(), 2);
    }

    #[test]
    fn test_user_stats_track_last_command() {
        let log = CommandLog::new();
        log.record(&event(1, "ping"));
        log.record(&event(1, "imsakiyah"));

        let stats = log.user(1).unwrap();
        assert_eq!(stats.commands_used, 2);
        assert_eq!(stats.last_command, "imsakiyah");
        assert!(log.user(2).is_none());
    }

    #[test]
    fn test_top_commands_ordering() {
        let log = CommandLog::new();
        for command in ["help", "waifu", "waifu", "anime", "anime", "ping"] {
            log.record(&event(1, command));
        }

        assert_eq!(
            log.top_commands(3),
            vec![
                ("anime".to_string(), 2),
                ("waifu".to_string(), 2),
                ("help".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_tracker_processes_in_background() {
        let tracker = UsageTracker::new();
        tracker.log_command(1, None, "ping");
        tracker.log_command(2, Some(5), "help");

        for _ in 0..50 {
            if tracker.log().total() == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(tracker.log().total(), 2);
        assert_eq!(tracker.log().count("help"), 1);
    }
}
