//! School directory command handler
//!
//! Handles: sekolah
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Name search results listed alphabetically; localized replies
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::reply::{defer, edit_embed, edit_view, reply_view};
use crate::commands::slash::get_string_option;
use crate::core::{error_embed, warning_embed};
use crate::features::i18n::{text, Language};
use crate::features::schools::display::{
    detail_embed, new_search_session, no_results_message, render_session, root_embed,
    type_select, unknown_npsn_message,
};

/// Handler for /sekolah: type menu, name search and NPSN lookup
pub struct SchoolHandler;

#[async_trait]
impl SlashCommandHandler for SchoolHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["sekolah"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let lang = ctx.language(command.guild_id.map(|id| id.0)).await;
        let options = &command.data.options;

        if let Some(npsn) = get_string_option(options, "npsn") {
            return self.handle_npsn(&ctx, serenity_ctx, command, &npsn, lang).await;
        }
        if let Some(name) = get_string_option(options, "nama") {
            return self.handle_search(&ctx, serenity_ctx, command, &name, lang).await;
        }

        reply_view(serenity_ctx, command, root_embed(lang), type_select(lang)).await?;
        info!("Sekolah menu opened for user {}", command.user.id);
        Ok(())
    }
}

impl SchoolHandler {
    async fn handle_search(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        name: &str,
        lang: Language,
    ) -> Result<()> {
        defer(serenity_ctx, command).await?;

        let schools = match ctx.schools.search(name).await {
            Ok(schools) => schools,
            Err(e) => {
                warn!("School search for '{name}' failed: {e}");
                let embed = error_embed(&text(lang, "common.error_title"), &text(lang, "common.unavailable"));
                return edit_embed(serenity_ctx, command, embed).await;
            }
        };
        if schools.is_empty() {
            let embed = warning_embed("🔍", &no_results_message(name, lang));
            return edit_embed(serenity_ctx, command, embed).await;
        }

        let count = schools.len();
        let session = new_search_session(schools, name, lang, command.channel_id.0, Instant::now())?;
        let (embed, components) = render_session(&session);
        let message_id = edit_view(serenity_ctx, command, embed, components).await?;
        ctx.views.schools.insert(message_id, session);

        info!(
            "Sekolah search completed for user {} ({count} results for '{name}')",
            command.user.id
        );
        Ok(())
    }

    async fn handle_npsn(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        npsn: &str,
        lang: Language,
    ) -> Result<()> {
        defer(serenity_ctx, command).await?;

        let embed = match ctx.schools.by_npsn(npsn).await {
            Ok(Some(school)) => detail_embed(&school, lang),
            Ok(None) => warning_embed("🔍", &unknown_npsn_message(npsn, lang)),
            Err(e) => {
                warn!("NPSN lookup for '{npsn}' failed: {e}");
                error_embed(&text(lang, "common.error_title"), &text(lang, "common.unavailable"))
            }
        };
        edit_embed(serenity_ctx, command, embed).await?;

        info!("Sekolah NPSN lookup completed for user {}", command.user.id);
        Ok(())
    }
}
