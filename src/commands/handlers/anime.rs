//! Anime lookup command handlers
//!
//! Handles: anime, manga, character, topanime, topmanga, season, randomanime
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.1.0: Top manga, seasonal lineup and random anime
//! - 1.0.0: Initial implementation over Jikan v4

use anyhow::Result;
use async_trait::async_trait;
use chrono::Datelike;
use log::{info, warn};
use serenity::builder::CreateEmbed;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::reply::{defer, edit_embed};
use crate::commands::slash::{get_integer_option, get_string_option};
use crate::core::{error_embed, warning_embed};
use crate::features::anime::client::FIRST_SEASON_YEAR;
use crate::features::anime::{
    anime_embed, character_embed, check_season_year, manga_embed, season_embed, top_embed,
    top_manga_embed, Season,
};
use crate::features::i18n::{format_text, text, Language};

/// Handler for Jikan lookups: searches, rankings, seasons and random picks
pub struct AnimeHandler;

#[async_trait]
impl SlashCommandHandler for AnimeHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &[
            "anime",
            "manga",
            "character",
            "topanime",
            "topmanga",
            "season",
            "randomanime",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let lang = ctx.language(command.guild_id.map(|id| id.0)).await;
        let name = command.data.name.as_str();

        defer(serenity_ctx, command).await?;

        let options = &command.data.options;
        let embed = if name == "topanime" {
            let subtype = get_string_option(options, "subtype");
            match ctx.jikan.top_anime(subtype.as_deref()).await {
                Ok(list) => top_embed(&list, subtype.as_deref(), lang),
                Err(e) => unavailable(lang, name, &e),
            }
        } else if name == "topmanga" {
            let subtype = get_string_option(options, "subtype");
            match ctx.jikan.top_manga(subtype.as_deref()).await {
                Ok(list) => top_manga_embed(&list, subtype.as_deref(), lang),
                Err(e) => unavailable(lang, name, &e),
            }
        } else if name == "season" {
            let season = get_string_option(options, "season")
                .and_then(|s| Season::parse(&s))
                .unwrap_or_else(Season::current);
            let current_year = chrono::Utc::now().year();
            let year = get_integer_option(options, "year")
                .map(|y| y as i32)
                .unwrap_or(current_year);
            match check_season_year(year, current_year) {
                Err(_) => invalid_year(lang, current_year),
                Ok(year) => match ctx.jikan.season(year, season).await {
                    Ok(list) => season_embed(&list, season, year, lang),
                    Err(e) => unavailable(lang, name, &e),
                },
            }
        } else if name == "randomanime" {
            match ctx.jikan.random_anime().await {
                Ok(Some(anime)) => anime_embed(&anime, lang),
                Ok(None) => unavailable(lang, name, &anyhow::anyhow!("empty random/anime body")),
                Err(e) => unavailable(lang, name, &e),
            }
        } else {
            let query = get_string_option(options, "query").unwrap_or_default();
            let found = match name {
                "anime" => ctx.jikan.anime(&query).await.map(|a| a.map(|a| anime_embed(&a, lang))),
                "manga" => ctx.jikan.manga(&query).await.map(|m| m.map(|m| manga_embed(&m, lang))),
                "character" => ctx
                    .jikan
                    .character(&query)
                    .await
                    .map(|c| c.map(|c| character_embed(&c, lang))),
                _ => return Ok(()),
            };
            match found {
                Ok(Some(embed)) => embed,
                Ok(None) => not_found(lang, &query),
                Err(e) => unavailable(lang, name, &e),
            }
        };

        edit_embed(serenity_ctx, command, embed).await?;
        info!("{name} command completed for user {}", command.user.id);
        Ok(())
    }
}

fn not_found(lang: Language, query: &str) -> CreateEmbed {
    warning_embed(
        "🔍",
        &format_text(lang, "anime.not_found", &[("query", query)]),
    )
}

fn invalid_year(lang: Language, current_year: i32) -> CreateEmbed {
    let min = FIRST_SEASON_YEAR.to_string();
    let max = (current_year + 1).to_string();
    warning_embed(
        "📅",
        &format_text(lang, "anime.invalid_year", &[("min", &min), ("max", &max)]),
    )
}

fn unavailable(lang: Language, command: &str, error: &anyhow::Error) -> CreateEmbed {
    warn!("Jikan request for /{command} failed: {error}");
    error_embed(&text(lang, "common.error_title"), &text(lang, "common.unavailable"))
}
