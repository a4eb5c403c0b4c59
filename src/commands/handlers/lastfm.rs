//! Last.fm command handler
//!
//! Handles: lastfm (set, np, recent, topartists, topalbums, album, artist)
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.2.0
//!
//! ## Changelog
//! - 1.1.0: Album and artist cards
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::builder::CreateEmbed;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption,
};
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::reply::{defer, edit_embed, reply_embed};
use crate::commands::slash::{get_string_option, get_subcommand};
use crate::core::{error_embed, success_embed, warning_embed};
use crate::features::i18n::{format_text, text, Language};
use crate::features::lastfm::{
    album_info_embed, artist_info_embed, now_playing_embed, recent_embed, top_albums_embed,
    top_artists_embed, LastfmClient, Period, LIST_LIMIT,
};

/// Handler for /lastfm and its subcommands
pub struct LastfmHandler;

#[async_trait]
impl SlashCommandHandler for LastfmHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["lastfm"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let lang = ctx.language(command.guild_id.map(|id| id.0)).await;
        let user_id = command.user.id.0;

        let Some(client) = ctx.lastfm.as_ref() else {
            let embed = warning_embed("Last.fm", &text(lang, "lastfm.not_configured"));
            return reply_embed(serenity_ctx, command, embed, true).await;
        };
        let Some((subcommand, options)) = get_subcommand(&command.data.options) else {
            return Ok(());
        };

        if subcommand == "set" {
            let username = get_string_option(options, "username").unwrap_or_default();
            defer(serenity_ctx, command).await?;
            let embed = match client.user_exists(&username).await {
                Ok(true) => {
                    ctx.lastfm_links.link(user_id, &username);
                    info!("User {user_id} linked Last.fm account '{username}'");
                    success_embed(
                        "Last.fm",
                        &format_text(lang, "lastfm.linked", &[("username", &username)]),
                    )
                }
                Ok(false) => error_embed(
                    &text(lang, "common.error_title"),
                    &format_text(lang, "lastfm.user_not_found", &[("username", &username)]),
                ),
                Err(e) => unavailable(lang, &e),
            };
            return edit_embed(serenity_ctx, command, embed).await;
        }

        // `recent` may look at any user; everything else needs a linked account
        let username = get_string_option(options, "username").or_else(|| ctx.lastfm_links.get(user_id));
        let Some(username) = username else {
            let embed = warning_embed("Last.fm", &text(lang, "lastfm.not_linked"));
            return reply_embed(serenity_ctx, command, embed, true).await;
        };
        let period = get_string_option(options, "period")
            .and_then(|p| Period::parse(&p))
            .unwrap_or_default();

        defer(serenity_ctx, command).await?;
        let embed = lookup(client, subcommand, options, &username, period, lang)
            .await
            .unwrap_or_else(|e| unavailable(lang, &e));
        edit_embed(serenity_ctx, command, embed).await?;

        info!("lastfm {subcommand} command completed for user {user_id}");
        Ok(())
    }
}

async fn lookup(
    client: &LastfmClient,
    subcommand: &str,
    options: &[CommandDataOption],
    username: &str,
    period: Period,
    lang: Language,
) -> Result<CreateEmbed> {
    let embed = match subcommand {
        "np" => {
            let tracks = client.recent_tracks(username, 1).await?;
            match tracks.first() {
                Some(track) => now_playing_embed(track, username, lang),
                None => warning_embed("Last.fm", &text(lang, "lastfm.no_tracks")),
            }
        }
        "recent" => {
            let tracks = client.recent_tracks(username, LIST_LIMIT).await?;
            recent_embed(&tracks, username, lang)
        }
        "topartists" => {
            let artists = client.top_artists(username, period).await?;
            top_artists_embed(&artists, username, period, lang)
        }
        "topalbums" => {
            let albums = client.top_albums(username, period).await?;
            top_albums_embed(&albums, username, period, lang)
        }
        "album" => {
            let album = get_string_option(options, "album").unwrap_or_default();
            let artist = match get_string_option(options, "artist") {
                Some(artist) => Some(artist),
                None => client.album_artist(&album).await?,
            };
            let info = match artist {
                Some(artist) => client.album_info(&artist, &album, username).await?,
                None => None,
            };
            match info {
                Some(info) => album_info_embed(&info, lang),
                None => not_found(lang, "lastfm.album_not_found", &album),
            }
        }
        "artist" => {
            let name = get_string_option(options, "name").unwrap_or_default();
            match client.artist_info(&name, username).await? {
                Some(info) => artist_info_embed(&info, lang),
                None => not_found(lang, "lastfm.artist_not_found", &name),
            }
        }
        other => anyhow::bail!("Unknown lastfm subcommand: {other}"),
    };
    Ok(embed)
}

fn not_found(lang: Language, key: &str, query: &str) -> CreateEmbed {
    warning_embed("Last.fm", &format_text(lang, key, &[("query", query)]))
}

fn unavailable(lang: Language, error: &anyhow::Error) -> CreateEmbed {
    warn!("Last.fm request failed: {error}");
    error_embed(&text(lang, "common.error_title"), &text(lang, "common.unavailable"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_rejects_unknown_subcommand() {
        let client = LastfmClient::with_base_url(reqwest::Client::new(), "http://127.0.0.1:9", "key");
        let result = lookup(&client, "loved", &[], "rj", Period::Overall, Language::En).await;
        assert!(result.unwrap_err().to_string().contains("loved"));
    }

    #[test]
    fn test_not_found_names_query() {
        let embed = not_found(Language::En, "lastfm.album_not_found", "Hybrid Theory");
        assert_eq!(
            embed.0.get("description").and_then(|v| v.as_str()),
            Some("No album found for 'Hybrid Theory'.")
        );
    }
}
