//! Waifu image command handlers
//!
//! Handles: waifu, randomwaifu, categories
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::builder::CreateEmbed;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::reply::{defer, edit_embed, reply_embed};
use crate::commands::slash::get_string_option;
use crate::core::{colors, error_embed};
use crate::features::i18n::{format_text, text, Language};
use crate::features::waifu::{category_emoji, is_category, random_category, CATEGORIES, DEFAULT_CATEGORY};

/// Handler for image commands: waifu, randomwaifu, categories
pub struct WaifuHandler;

#[async_trait]
impl SlashCommandHandler for WaifuHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["waifu", "randomwaifu", "categories"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let lang = ctx.language(command.guild_id.map(|id| id.0)).await;

        match command.data.name.as_str() {
            "waifu" => {
                let category = get_string_option(&command.data.options, "category")
                    .map(|c| c.to_lowercase())
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
                self.send_image(&ctx, serenity_ctx, command, &category, lang).await
            }
            "randomwaifu" => {
                self.send_image(&ctx, serenity_ctx, command, random_category(), lang)
                    .await
            }
            "categories" => {
                reply_embed(serenity_ctx, command, categories_embed(lang), false).await?;
                info!("Categories command completed for user {}", command.user.id);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl WaifuHandler {
    async fn send_image(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        category: &str,
        lang: Language,
    ) -> Result<()> {
        if !is_category(category) {
            let embed = error_embed(
                &text(lang, "common.error_title"),
                &format_text(lang, "waifu.unknown_category", &[("category", category)]),
            );
            return reply_embed(serenity_ctx, command, embed, true).await;
        }

        defer(serenity_ctx, command).await?;

        match ctx.waifu.image(category).await {
            Ok(url) => {
                edit_embed(serenity_ctx, command, image_embed(category, &url)).await?;
                info!(
                    "Waifu command completed for user {} (category: {category})",
                    command.user.id
                );
            }
            Err(e) => {
                warn!("waifu.pics request failed for '{category}': {e}");
                let embed = error_embed(&text(lang, "common.error_title"), &text(lang, "waifu.fetch_failed"));
                edit_embed(serenity_ctx, command, embed).await?;
            }
        }
        Ok(())
    }
}

pub fn image_embed(category: &str, url: &str) -> CreateEmbed {
    let emoji = category_emoji(category).unwrap_or("🖼️");
    let mut embed = CreateEmbed::default();
    embed
        .title(format!("{emoji} {}", capitalize(category)))
        .image(url)
        .color(colors::PINK)
        .footer(|f| f.text("Powered by waifu.pics"));
    embed
}

pub fn categories_embed(lang: Language) -> CreateEmbed {
    let list: Vec<String> = CATEGORIES
        .iter()
        .map(|(category, emoji)| format!("{emoji} `{category}`"))
        .collect();

    let mut embed = CreateEmbed::default();
    embed
        .title(text(lang, "waifu.categories_title"))
        .description(list.join("\n"))
        .color(colors::PINK)
        .footer(|f| f.text(text(lang, "waifu.categories_footer")));
    embed
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
