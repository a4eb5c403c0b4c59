//! # Command Dispatch
//!
//! Entry point for slash commands and prefixed text messages. Applies the
//! per-user cooldown, records usage and routes each command to its handler
//! through the [`CommandRegistry`].
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 3.0.0: Registry dispatch only, per-group cooldowns, prefix-aware text commands
//! - 2.0.0: Slash-only dispatch through modular handlers
//! - 0.1.0: Initial command handler

use anyhow::Result;
use log::{debug, info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handlers::create_all_handlers;
use crate::commands::handlers::utility::info_embed;
use crate::commands::registry::CommandRegistry;
use crate::commands::reply::{reply_embed, reply_text};
use crate::core::warning_embed;
use crate::features::help;
use crate::features::i18n::{format_text, text};
use crate::features::rate_limiting::CooldownGroup;

/// Text commands answered in-channel; everything else is slash-only
const TEXT_COMMANDS: &[&str] = &["ping", "help", "info"];

#[derive(Clone)]
pub struct CommandHandler {
    ctx: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    /// Build the dispatcher with every handler registered
    pub fn new(ctx: Arc<CommandContext>) -> Result<Self> {
        let registry = CommandRegistry::from_handlers(create_all_handlers())?;
        info!("Command registry ready ({} commands)", registry.len());
        Ok(Self { ctx, registry })
    }

    pub fn context(&self) -> Arc<CommandContext> {
        Arc::clone(&self.ctx)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub async fn handle_slash_command(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        let request_id = Uuid::new_v4();
        let name = command.data.name.as_str();
        let user_id = command.user.id.0;
        let guild_id = command.guild_id.map(|id| id.0);
        let guild_label = guild_id.map(|id| id.to_string()).unwrap_or_else(|| "DM".to_string());

        info!(
            "[{request_id}] 📥 Slash command received | Command: {name} | User: {user_id} | Channel: {} | Guild: {guild_label}",
            command.channel_id
        );

        let lang = self.ctx.language(guild_id).await;

        debug!("[{request_id}] 🔍 Checking cooldown for user: {user_id}");
        if let Err(remaining) = self
            .ctx
            .cooldowns
            .check(CooldownGroup::for_command(name), user_id, Instant::now())
        {
            warn!("[{request_id}] 🚫 Cooldown active for user {user_id} on /{name}");
            let seconds = wait_seconds(remaining).to_string();
            let embed = warning_embed(
                &text(lang, "cooldown.title"),
                &format_text(lang, "cooldown.wait", &[("seconds", &seconds)]),
            );
            return reply_embed(ctx, command, embed, true).await;
        }
        debug!("[{request_id}] ✅ Cooldown check passed");

        let Some(handler) = self.registry.get(name) else {
            warn!("[{request_id}] ❓ Unknown slash command: {name}");
            return reply_text(ctx, command, &text(lang, "common.unknown_command"), true).await;
        };

        self.ctx.usage_tracker.log_command(user_id, guild_id, name);

        info!("[{request_id}] 🎯 Processing slash command: {name} from user: {user_id}");
        handler.handle(Arc::clone(&self.ctx), ctx, command).await?;

        info!("[{request_id}] ✅ Slash command processing completed");
        Ok(())
    }

    /// Answer `<prefix>ping`, `<prefix>help` and `<prefix>info`
    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        if msg.author.bot {
            return Ok(());
        }

        let guild_id = msg.guild_id.map(|id| id.0);
        let prefix = self.ctx.settings.prefix(guild_id).await;
        let Some(name) = parse_text_command(&msg.content, &prefix) else {
            return Ok(());
        };

        let request_id = Uuid::new_v4();
        let user_id = msg.author.id.0;
        info!(
            "[{request_id}] 📥 Text command received | Command: {name} | User: {user_id} | Channel: {}",
            msg.channel_id
        );

        if let Err(remaining) = self
            .ctx
            .cooldowns
            .check(CooldownGroup::for_command(name), user_id, Instant::now())
        {
            debug!("[{request_id}] 🚫 Cooldown active for user {user_id}, {}s left", remaining.as_secs());
            return Ok(());
        }

        let lang = self.ctx.language(guild_id).await;
        self.ctx.usage_tracker.log_command(user_id, guild_id, name);

        match name {
            "ping" => {
                let started = Instant::now();
                let mut reply = msg.channel_id.say(&ctx.http, "🏓 Pong!").await?;
                let latency = started.elapsed().as_millis().to_string();
                reply
                    .edit(ctx, |m| {
                        m.content(format_text(lang, "ping.response", &[("latency", &latency)]))
                    })
                    .await?;
            }
            "help" => {
                msg.channel_id
                    .say(&ctx.http, help::text_summary(lang, &prefix))
                    .await?;
            }
            "info" => {
                let embed = info_embed(
                    lang,
                    self.ctx.start_time.elapsed(),
                    ctx.cache.guild_count(),
                    self.ctx.usage_tracker.log(),
                );
                msg.channel_id
                    .send_message(&ctx.http, |m| m.set_embed(embed))
                    .await?;
            }
            _ => {}
        }

        info!("[{request_id}] ✅ Text command '{name}' answered for user {user_id}");
        Ok(())
    }
}

/// Command name of a prefixed text message, if it is one we answer
pub fn parse_text_command<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content.trim().strip_prefix(prefix)?;
    let name = rest.split_whitespace().next()?;
    TEXT_COMMANDS.iter().find(|c| c.eq_ignore_ascii_case(name)).copied()
}

/// Whole seconds left, rounded up so the user never sees "0"
fn wait_seconds(remaining: Duration) -> u64 {
    let secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 || secs == 0 {
        secs + 1
    } else {
        secs
    }
}
