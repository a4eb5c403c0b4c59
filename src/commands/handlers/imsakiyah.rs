//! Prayer schedule command handler
//!
//! Handles: imsakiyah
//!
//! - **Version**: 1.0.1
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.1: Replies follow the server language
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::reply::{defer, edit_embed, edit_text, edit_view};
use crate::commands::slash::get_string_option;
use crate::core::warning_embed;
use crate::features::i18n::Language;
use crate::features::paging::navigate::on_search_submitted;
use crate::features::paging::SearchOutcome;
use crate::features::prayer::display::{
    main_menu, new_results_session, no_match_message, not_available_message, render_session,
    results_label, schedule_embed, PAGE_SIZE,
};
use crate::features::prayer::{find_city, group_by_region, wib_today};

/// Handler for /imsakiyah: region menu, city schedule and city search
pub struct ImsakiyahHandler;

#[async_trait]
impl SlashCommandHandler for ImsakiyahHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["imsakiyah"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let lang = ctx.language(command.guild_id.map(|id| id.0)).await;
        let options = &command.data.options;

        // The city list may need a feed round trip
        defer(serenity_ctx, command).await?;

        if let Some(city) = get_string_option(options, "kota") {
            return self.handle_schedule(&ctx, serenity_ctx, command, &city, lang).await;
        }
        if let Some(query) = get_string_option(options, "cari") {
            return self.handle_search(&ctx, serenity_ctx, command, &query, lang).await;
        }

        let cities = ctx.prayer.cities().await;
        let (embed, components) = main_menu(&group_by_region(&cities), lang);
        edit_view(serenity_ctx, command, embed, components).await?;

        info!("Imsakiyah menu opened for user {}", command.user.id);
        Ok(())
    }
}

impl ImsakiyahHandler {
    async fn handle_schedule(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        query: &str,
        lang: Language,
    ) -> Result<()> {
        let cities = ctx.prayer.cities().await;
        let Some(city) = find_city(&cities, query) else {
            return edit_text(serenity_ctx, command, &no_match_message(query, None, lang)).await;
        };

        let today = wib_today(Utc::now());
        let month = ctx.prayer.month(&city.id, today.year(), today.month()).await;
        let embed = match month.day(today) {
            Some(day) => schedule_embed(city, today, day, month.is_fallback, lang),
            None => warning_embed("🕌", &not_available_message(city, lang)),
        };
        edit_embed(serenity_ctx, command, embed).await?;

        info!(
            "Imsakiyah schedule for {} sent to user {}",
            city.name, command.user.id
        );
        Ok(())
    }

    async fn handle_search(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        query: &str,
        lang: Language,
    ) -> Result<()> {
        let cities = ctx.prayer.cities().await;
        let view = match on_search_submitted(&cities, query, PAGE_SIZE, results_label(query, lang))? {
            SearchOutcome::Found(view) => view,
            SearchOutcome::NoMatch { query } => {
                return edit_text(serenity_ctx, command, &no_match_message(&query, None, lang)).await;
            }
        };

        let count = view.len();
        let session = new_results_session(view, None, lang, command.channel_id.0, Instant::now());
        let (embed, components) = render_session(&session);
        let message_id = edit_view(serenity_ctx, command, embed, components).await?;
        ctx.views.cities.insert(message_id, session);

        info!(
            "Imsakiyah search completed for user {} ({count} cities for '{query}')",
            command.user.id
        );
        Ok(())
    }
}
