//! Utility command handlers
//!
//! Handles: ping, help, info, stats
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Paged help menu, localized info and owner-only stats
//! - 1.0.0: Extracted from command_handler.rs

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::builder::CreateEmbed;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::reply::{edit_text, reply_embed, reply_text, reply_view};
use crate::core::{colors, error_embed};
use crate::features::analytics::CommandLog;
use crate::features::help;
use crate::features::i18n::{format_text, text, Language};
use crate::features::{get_bot_version, get_features};

pub const BOT_NAME: &str = "Rurawr";
const TOP_COMMANDS: usize = 10;

/// Handler for utility commands: ping, help, info, stats
pub struct UtilityHandler;

#[async_trait]
impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ping", "help", "info", "stats"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let guild_id = command.guild_id.map(|id| id.0);
        let lang = ctx.language(guild_id).await;

        match command.data.name.as_str() {
            "ping" => self.handle_ping(serenity_ctx, command, lang).await,
            "help" => self.handle_help(&ctx, serenity_ctx, command, lang).await,
            "info" => self.handle_info(&ctx, serenity_ctx, command, lang).await,
            "stats" => self.handle_stats(&ctx, serenity_ctx, command, lang).await,
            _ => Ok(()),
        }
    }
}

impl UtilityHandler {
    /// Handle /ping: answer, then edit in the measured round trip
    async fn handle_ping(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        lang: Language,
    ) -> Result<()> {
        let started = Instant::now();
        reply_text(serenity_ctx, command, "🏓 Pong!", false).await?;
        let latency = started.elapsed().as_millis().to_string();

        edit_text(
            serenity_ctx,
            command,
            &format_text(lang, "ping.response", &[("latency", &latency)]),
        )
        .await?;

        info!("Ping command completed for user {} ({latency} ms)", command.user.id);
        Ok(())
    }

    /// Handle /help: category overview; the select opens a paged list
    async fn handle_help(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        lang: Language,
    ) -> Result<()> {
        let prefix = ctx.settings.prefix(command.guild_id.map(|id| id.0)).await;
        let (embed, components) = help::overview(BOT_NAME, lang, &prefix);
        reply_view(serenity_ctx, command, embed, components).await?;

        info!("Help command completed for user {}", command.user.id);
        Ok(())
    }

    /// Handle /info
    async fn handle_info(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        lang: Language,
    ) -> Result<()> {
        let servers = serenity_ctx.cache.guild_count();
        let embed = info_embed(lang, ctx.start_time.elapsed(), servers, ctx.usage_tracker.log());
        reply_embed(serenity_ctx, command, embed, false).await?;

        info!("Info command completed for user {}", command.user.id);
        Ok(())
    }

    /// Handle /stats (owner only when an owner is configured)
    async fn handle_stats(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        lang: Language,
    ) -> Result<()> {
        if !ctx.is_owner(command.user.id.0) {
            let embed = error_embed(&text(lang, "common.error_title"), &text(lang, "common.owner_only"));
            return reply_embed(serenity_ctx, command, embed, true).await;
        }

        let embed = stats_embed(lang, ctx.usage_tracker.log());
        reply_embed(serenity_ctx, command, embed, true).await?;

        info!("Stats command completed for user {}", command.user.id);
        Ok(())
    }
}

/// `1d 2h 3m 4s`, dropping leading zero units
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

pub fn info_embed(lang: Language, uptime: Duration, servers: usize, log: &CommandLog) -> CreateEmbed {
    let features: Vec<String> = get_features()
        .iter()
        .map(|f| format!("• {} v{}", f.name, f.version))
        .collect();

    let mut embed = CreateEmbed::default();
    embed
        .title(format_text(lang, "info.title", &[("name", BOT_NAME)]))
        .description(features.join("\n"))
        .color(colors::PRIMARY)
        .field(text(lang, "info.version"), get_bot_version(), true)
        .field(text(lang, "info.uptime"), format_uptime(uptime), true)
        .field(text(lang, "info.servers"), servers.to_string(), true)
        .field(text(lang, "info.commands"), log.total().to_string(), true);
    embed
}

pub fn stats_embed(lang: Language, log: &CommandLog) -> CreateEmbed {
    let top = log.top_commands(TOP_COMMANDS);
    let top_text = if top.is_empty() {
        text(lang, "stats.none")
    } else {
        top.iter()
            .enumerate()
            .map(|(i, (command, count))| format!("`{}.` /{command}: {count}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut embed = CreateEmbed::default();
    embed
        .title(text(lang, "stats.title"))
        .color(colors::INFO)
        .field(text(lang, "stats.total"), log.total().to_string(), true)
        .field(text(lang, "stats.users"), log.unique_users().to_string(), true)
        .field(text(lang, "stats.top"), top_text, false);
    embed
}
