//! Guild settings command handlers
//!
//! Handles: prefix, language
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::channel::ReactionType;
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::reply::{reply_embed, reply_view};
use crate::commands::slash::get_string_option;
use crate::core::{colors, error_embed, success_embed};
use crate::features::i18n::{format_text, text, Language};

pub const LANGUAGE_SELECT_ID: &str = "language_select";

/// Handler for guild settings: prefix, language
pub struct SettingsHandler;

#[async_trait]
impl SlashCommandHandler for SettingsHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["prefix", "language"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "prefix" => self.handle_prefix(&ctx, serenity_ctx, command).await,
            "language" => self.handle_language(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

fn member_permissions(command: &ApplicationCommandInteraction) -> Option<Permissions> {
    command.member.as_ref().and_then(|m| m.permissions)
}

impl SettingsHandler {
    async fn handle_prefix(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let guild_id = command.guild_id.map(|id| id.0);
        let lang = ctx.language(guild_id).await;

        let Some(new_prefix) = get_string_option(&command.data.options, "new_prefix") else {
            let prefix = ctx.settings.prefix(guild_id).await;
            let mut embed = CreateEmbed::default();
            embed
                .description(format_text(lang, "prefix.current", &[("prefix", &prefix)]))
                .color(colors::INFO);
            return reply_embed(serenity_ctx, command, embed, true).await;
        };

        if let Some(reason) = change_denied(guild_id, member_permissions(command)) {
            let embed = error_embed(&text(lang, "common.error_title"), &text(lang, reason));
            return reply_embed(serenity_ctx, command, embed, true).await;
        }
        let Some(guild_id) = guild_id else {
            return Ok(());
        };

        match ctx.settings.set_prefix(guild_id, &new_prefix).await {
            Ok(prefix) => {
                info!("Prefix for guild {guild_id} set to '{prefix}' by user {}", command.user.id);
                let embed = success_embed(
                    "✅",
                    &format_text(lang, "prefix.changed", &[("prefix", &prefix)]),
                );
                reply_embed(serenity_ctx, command, embed, false).await
            }
            Err(_) => {
                let embed = error_embed(&text(lang, "common.error_title"), &text(lang, "prefix.invalid"));
                reply_embed(serenity_ctx, command, embed, true).await
            }
        }
    }

    async fn handle_language(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let guild_id = command.guild_id.map(|id| id.0);
        let lang = ctx.language(guild_id).await;

        let Some(code) = get_string_option(&command.data.options, "code") else {
            let embed = language_embed(lang, "language.current", lang);
            reply_view(serenity_ctx, command, embed, language_select(lang)).await?;
            return Ok(());
        };

        if let Some(reason) = change_denied(guild_id, member_permissions(command)) {
            let embed = error_embed(&text(lang, "common.error_title"), &text(lang, reason));
            return reply_embed(serenity_ctx, command, embed, true).await;
        }
        let (Some(guild_id), Some(new_lang)) = (guild_id, Language::parse(&code)) else {
            return Ok(());
        };

        ctx.settings.set_language(guild_id, new_lang).await;
        info!(
            "Language for guild {guild_id} set to '{}' by user {}",
            new_lang.code(),
            command.user.id
        );

        let embed = language_embed(new_lang, "language.changed", new_lang);
        reply_embed(serenity_ctx, command, embed, false).await
    }
}

/// Why a settings change is refused, as an i18n key
///
/// Changes need a guild and the Manage Server permission.
pub fn change_denied(guild_id: Option<u64>, permissions: Option<Permissions>) -> Option<&'static str> {
    if guild_id.is_none() {
        return Some("common.guild_only");
    }
    let can_manage = permissions
        .map(|p| p.manage_guild() || p.administrator())
        .unwrap_or(false);
    (!can_manage).then_some("common.no_permission")
}

pub fn language_embed(lang: Language, key: &str, shown: Language) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .description(format_text(
            lang,
            key,
            &[("flag", shown.flag()), ("language", shown.display_name())],
        ))
        .color(colors::INFO);
    embed
}

pub fn language_select(lang: Language) -> CreateComponents {
    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_select_menu(|menu| {
            menu.custom_id(LANGUAGE_SELECT_ID)
                .placeholder(text(lang, "language.placeholder"))
                .options(|opts| {
                    for option in Language::ALL {
                        opts.create_option(|o| {
                            o.label(option.display_name())
                                .value(option.code())
                                .emoji(ReactionType::Unicode(option.flag().to_string()))
                                .default_selection(option == lang)
                        });
                    }
                    opts
                })
        })
    });
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_denied_outside_guild() {
        assert_eq!(change_denied(None, Some(Permissions::all())), Some("common.guild_only"));
    }

    #[test]
    fn test_change_denied_permissions() {
        assert_eq!(change_denied(Some(1), None), Some("common.no_permission"));
        assert_eq!(
            change_denied(Some(1), Some(Permissions::SEND_MESSAGES)),
            Some("common.no_permission")
        );
        assert_eq!(change_denied(Some(1), Some(Permissions::MANAGE_GUILD)), None);
        assert_eq!(change_denied(Some(1), Some(Permissions::ADMINISTRATOR)), None);
    }

    #[test]
    fn test_language_select_lists_every_language() {
        let components = language_select(Language::En);
        let options = components.0[0]["components"][0]["options"].as_array().unwrap();
        assert_eq!(options.len(), Language::ALL.len());
        let en = options.iter().find(|o| o["value"] == "en").unwrap();
        assert_eq!(en["default"].as_bool(), Some(true));
    }

    #[test]
    fn test_language_embed_changed() {
        let embed = language_embed(Language::En, "language.changed", Language::En);
        let description = embed.0.get("description").and_then(|v| v.as_str()).unwrap();
        assert!(description.contains("English"));
    }
}
