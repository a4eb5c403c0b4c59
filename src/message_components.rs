//! # Message Components
//!
//! Buttons, select menus and modals attached to bot messages. Navigation
//! buttons are routed to the paged view registered for the clicked message;
//! select menus open new views on the same message.
//!
//! - **Version**: 2.1.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 2.1.0: City searches honour the view timeout before the sweeper runs
//! - 2.0.0: Paged view navigation, search modal and settings select
//! - 0.3.0: Initial buttons and modals

use anyhow::Result;
use log::{debug, info, warn};
use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::model::application::component::ActionRowComponent;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;

use crate::commands::context::{CommandContext, Views};
use crate::commands::handlers::settings::{
    change_denied, language_embed, language_select, LANGUAGE_SELECT_ID,
};
use crate::commands::handlers::utility::BOT_NAME;
use crate::core::{error_embed, warning_embed};
use crate::features::help::{self, HelpViewContext};
use crate::features::i18n::{text, Language};
use crate::features::paging::navigate::{on_clicked, on_home_clicked, on_search_submitted};
use crate::features::paging::{NavAction, SearchOutcome};
use crate::features::prayer::display as cities;
use crate::features::prayer::{cities_in, group_by_region, Region};
use crate::features::schools::display as schools;
use crate::features::schools::SchoolType;

/// Where a component custom id is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRoute<'a> {
    SchoolType,
    Region,
    HelpCategory,
    Language,
    Navigation { scope: &'a str, action: NavAction },
    Unknown,
}

impl<'a> ComponentRoute<'a> {
    pub fn from_custom_id(custom_id: &'a str) -> Self {
        match custom_id {
            schools::TYPE_SELECT_ID => ComponentRoute::SchoolType,
            cities::REGION_SELECT_ID => ComponentRoute::Region,
            help::CATEGORY_SELECT_ID => ComponentRoute::HelpCategory,
            LANGUAGE_SELECT_ID => ComponentRoute::Language,
            id => match NavAction::from_custom_id(id) {
                Some((scope, action)) => ComponentRoute::Navigation { scope, action },
                None => ComponentRoute::Unknown,
            },
        }
    }
}

/// Handler for all message component interactions
pub struct MessageComponentHandler {
    ctx: Arc<CommandContext>,
}

impl MessageComponentHandler {
    pub fn new(ctx: Arc<CommandContext>) -> Self {
        Self { ctx }
    }

    /// Handle all types of component interactions
    pub async fn handle_component_interaction(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let custom_id = interaction.data.custom_id.as_str();
        let lang = self.ctx.language(interaction.guild_id.map(|id| id.0)).await;

        debug!(
            "Processing component interaction: {custom_id} from user: {}",
            interaction.user.id
        );

        let value = interaction.data.values.first().map(String::as_str).unwrap_or_default();
        match ComponentRoute::from_custom_id(custom_id) {
            ComponentRoute::SchoolType => self.handle_school_type(ctx, interaction, value, lang).await,
            ComponentRoute::Region => self.handle_region(ctx, interaction, value, lang).await,
            ComponentRoute::HelpCategory => self.handle_help_category(ctx, interaction, value, lang).await,
            ComponentRoute::Language => self.handle_language(ctx, interaction, value, lang).await,
            ComponentRoute::Navigation { scope, action } => {
                self.handle_navigation(ctx, interaction, scope, action, lang).await
            }
            ComponentRoute::Unknown => {
                warn!("Unknown component interaction: {custom_id}");
                acknowledge(ctx, interaction).await
            }
        }
    }

    /// Handle modal submit interactions
    pub async fn handle_modal_submit(&self, ctx: &Context, interaction: &ModalSubmitInteraction) -> Result<()> {
        let custom_id = interaction.data.custom_id.as_str();
        debug!("Processing modal submit: {custom_id} from user: {}", interaction.user.id);

        if custom_id != cities::SEARCH_MODAL_ID {
            warn!("Unknown modal submission: {custom_id}");
            return Ok(());
        }

        let lang = self.ctx.language(interaction.guild_id.map(|id| id.0)).await;
        let query = modal_value(interaction, cities::SEARCH_INPUT_ID).unwrap_or_default();
        let Some(message) = interaction.message.as_ref() else {
            return Ok(());
        };
        let message_id = message.id.0;

        let Some(region) = search_scope(&self.ctx.views, message_id, Instant::now()) else {
            return modal_ephemeral(ctx, interaction, &text(lang, "common.expired")).await;
        };

        let all = self.ctx.prayer.cities().await;
        let scoped = match region {
            Some(region) => cities_in(region, &all),
            None => all,
        };

        match on_search_submitted(&scoped, &query, cities::PAGE_SIZE, cities::results_label(&query, lang))? {
            SearchOutcome::Found(view) => {
                let count = view.len();
                let session = cities::new_results_session(
                    view,
                    region,
                    lang,
                    interaction.channel_id.0,
                    Instant::now(),
                );
                let (embed, components) = cities::render_session(&session);
                self.ctx.views.cities.insert(message_id, session);

                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::UpdateMessage)
                            .interaction_response_data(|data| {
                                data.set_embed(embed).set_components(components)
                            })
                    })
                    .await?;
                info!("City search '{query}' replaced view {message_id} ({count} results)");
                Ok(())
            }
            SearchOutcome::NoMatch { query } => {
                modal_ephemeral(ctx, interaction, &cities::no_match_message(&query, region, lang)).await
            }
        }
    }

    async fn handle_navigation(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        scope: &str,
        action: NavAction,
        lang: Language,
    ) -> Result<()> {
        let message_id = interaction.message.id.0;
        let now = Instant::now();
        let views = &self.ctx.views;

        let live = match scope {
            schools::SCOPE => views.schools.contains(message_id),
            cities::SCOPE => views.cities.contains(message_id),
            help::SCOPE => views.help.contains(message_id),
            _ => false,
        };
        if !live {
            warn!("Ignoring {scope}_{action} click on message {message_id} without a live view");
            return ephemeral(ctx, interaction, &text(lang, "common.expired")).await;
        }

        let rendered = match (scope, action) {
            (cities::SCOPE, NavAction::Search) => {
                if views.cities.accept(message_id, action, now, |_| ()).is_none() {
                    return acknowledge(ctx, interaction).await;
                }
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::Modal)
                            .interaction_response_data(|data| cities::search_modal(data, lang))
                    })
                    .await?;
                return Ok(());
            }
            (cities::SCOPE, NavAction::Home) => match on_home_clicked(&views.cities, message_id, now) {
                Some(_) => {
                    info!("City view {message_id} returned to the region menu");
                    let all = self.ctx.prayer.cities().await;
                    Some(cities::main_menu(&group_by_region(&all), lang))
                }
                None => None,
            },
            (help::SCOPE, NavAction::Home) => on_home_clicked(&views.help, message_id, now).map(|session| {
                info!("Help view {message_id} returned to the overview");
                help::overview(BOT_NAME, session.context.lang, &session.context.prefix)
            }),
            (schools::SCOPE, _) => on_clicked(&views.schools, message_id, action, now)
                .and_then(|_| views.schools.with_session(message_id, schools::render_session)),
            (cities::SCOPE, _) => on_clicked(&views.cities, message_id, action, now)
                .and_then(|_| views.cities.with_session(message_id, cities::render_session)),
            (help::SCOPE, _) => on_clicked(&views.help, message_id, action, now)
                .and_then(|_| views.help.with_session(message_id, help::render_session)),
            _ => None,
        };

        match rendered {
            Some((embed, components)) => update_message(ctx, interaction, embed, components).await,
            None => {
                debug!("Click {scope}_{action} on message {message_id} ignored");
                acknowledge(ctx, interaction).await
            }
        }
    }

    async fn handle_school_type(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        value: &str,
        lang: Language,
    ) -> Result<()> {
        let Some(school_type) = SchoolType::parse(value) else {
            return acknowledge(ctx, interaction).await;
        };

        // The directory API can be slow; acknowledge before fetching
        acknowledge(ctx, interaction).await?;

        let schools_list = match self.ctx.schools.by_type(school_type).await {
            Ok(list) => list,
            Err(e) => {
                warn!("School list for {} failed: {e}", school_type.code());
                let embed = error_embed(&text(lang, "common.error_title"), &text(lang, "common.unavailable"));
                interaction
                    .edit_original_interaction_response(&ctx.http, |response| {
                        response.set_embed(embed).set_components(schools::type_select(lang))
                    })
                    .await?;
                return Ok(());
            }
        };

        let message_id = interaction.message.id.0;
        let session = schools::new_session(
            schools_list,
            schools::type_label(school_type),
            schools::type_context(school_type),
            lang,
            interaction.channel_id.0,
            Instant::now(),
        )?;
        let (embed, components) = schools::render_session(&session);
        self.ctx.views.schools.insert(message_id, session);

        interaction
            .edit_original_interaction_response(&ctx.http, |response| {
                response.set_embed(embed).set_components(components)
            })
            .await?;
        info!("School view for {} opened on message {message_id}", school_type.code());
        Ok(())
    }

    async fn handle_region(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        value: &str,
        lang: Language,
    ) -> Result<()> {
        let Some(region) = Region::parse(value) else {
            return acknowledge(ctx, interaction).await;
        };

        let all = self.ctx.prayer.cities().await;
        let message_id = interaction.message.id.0;
        let session = cities::new_region_session(
            region,
            cities_in(region, &all),
            lang,
            interaction.channel_id.0,
            Instant::now(),
        )?;
        let (embed, components) = cities::render_session(&session);
        self.ctx.views.cities.insert(message_id, session);

        update_message(ctx, interaction, embed, components).await?;
        info!("City view for {} opened on message {message_id}", region.id());
        Ok(())
    }

    async fn handle_help_category(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        value: &str,
        lang: Language,
    ) -> Result<()> {
        let Some(category) = help::find_category(value) else {
            return acknowledge(ctx, interaction).await;
        };

        let prefix = self.ctx.settings.prefix(interaction.guild_id.map(|id| id.0)).await;
        let message_id = interaction.message.id.0;
        let session = help::new_session(
            category,
            HelpViewContext { lang, prefix },
            interaction.channel_id.0,
            Instant::now(),
        )?;
        let (embed, components) = help::render_session(&session);
        self.ctx.views.help.insert(message_id, session);

        update_message(ctx, interaction, embed, components).await?;
        info!("Help view for '{}' opened on message {message_id}", category.id);
        Ok(())
    }

    async fn handle_language(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        value: &str,
        lang: Language,
    ) -> Result<()> {
        let guild_id = interaction.guild_id.map(|id| id.0);
        let permissions = interaction.member.as_ref().and_then(|m| m.permissions);
        if let Some(reason) = change_denied(guild_id, permissions) {
            return ephemeral(ctx, interaction, &text(lang, reason)).await;
        }
        let (Some(guild_id), Some(new_lang)) = (guild_id, Language::parse(value)) else {
            return acknowledge(ctx, interaction).await;
        };

        self.ctx.settings.set_language(guild_id, new_lang).await;
        info!(
            "Language for guild {guild_id} set to '{}' by user {}",
            new_lang.code(),
            interaction.user.id
        );

        let embed = language_embed(new_lang, "language.changed", new_lang);
        update_message(ctx, interaction, embed, language_select(new_lang)).await
    }
}

/// Value typed into a modal text input
fn modal_value(interaction: &ModalSubmitInteraction, input_id: &str) -> Option<String> {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == input_id => {
                Some(input.value.trim().to_string())
            }
            _ => None,
        })
}

async fn update_message(
    ctx: &Context,
    interaction: &MessageComponentInteraction,
    embed: CreateEmbed,
    components: CreateComponents,
) -> Result<()> {
    interaction
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|data| data.set_embed(embed).set_components(components))
        })
        .await?;
    Ok(())
}

/// Acknowledge without changing the message
async fn acknowledge(ctx: &Context, interaction: &MessageComponentInteraction) -> Result<()> {
    interaction
        .create_interaction_response(&ctx.http, |response| {
            response.kind(InteractionResponseType::DeferredUpdateMessage)
        })
        .await?;
    Ok(())
}

async fn ephemeral(ctx: &Context, interaction: &MessageComponentInteraction, message: &str) -> Result<()> {
    let embed = warning_embed("⚠️", message);
    interaction
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|data| data.set_embed(embed).ephemeral(true))
        })
        .await?;
    Ok(())
}

async fn modal_ephemeral(ctx: &Context, interaction: &ModalSubmitInteraction, message: &str) -> Result<()> {
    interaction
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|data| data.content(message).ephemeral(true))
        })
        .await?;
    Ok(())
}

/// Region a city search from `message_id` runs in.
///
/// `None` when the view is gone or has timed out, even if the sweeper has
/// not dropped it yet.
pub fn search_scope(views: &Views, message_id: u64, now: Instant) -> Option<Option<Region>> {
    views
        .cities
        .accept(message_id, NavAction::Search, now, |session| session.context.region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::prayer::City;
    use std::time::Duration;

    #[test]
    fn test_route_selects() {
        assert_eq!(ComponentRoute::from_custom_id("school_type"), ComponentRoute::SchoolType);
        assert_eq!(ComponentRoute::from_custom_id("imsakiyah_region"), ComponentRoute::Region);
        assert_eq!(ComponentRoute::from_custom_id("help_category"), ComponentRoute::HelpCategory);
        assert_eq!(ComponentRoute::from_custom_id("language_select"), ComponentRoute::Language);
    }

    #[test]
    fn test_route_navigation_buttons() {
        assert_eq!(
            ComponentRoute::from_custom_id("schools_next"),
            ComponentRoute::Navigation {
                scope: "schools",
                action: NavAction::Next
            }
        );
        assert_eq!(
            ComponentRoute::from_custom_id("cities_search"),
            ComponentRoute::Navigation {
                scope: "cities",
                action: NavAction::Search
            }
        );
        assert_eq!(
            ComponentRoute::from_custom_id("help_home"),
            ComponentRoute::Navigation {
                scope: "help",
                action: NavAction::Home
            }
        );
    }

    fn city_view(views: &Views, message_id: u64, now: Instant) {
        let cities: Vec<City> = ["bandung", "bogor", "cirebon"]
            .iter()
            .map(|s| City::from_slug(s))
            .collect();
        let session =
            cities::new_region_session(Region::Jawa, cities, Language::Id, 1, now).unwrap();
        views.cities.insert(message_id, session);
    }

    #[test]
    fn test_search_scope_of_live_view() {
        let views = Views::default();
        let now = Instant::now();
        city_view(&views, 9, now);
        assert_eq!(search_scope(&views, 9, now), Some(Some(Region::Jawa)));
        assert_eq!(search_scope(&views, 10, now), None);
    }

    #[test]
    fn test_search_scope_of_timed_out_view() {
        let views = Views::default();
        let start = Instant::now();
        city_view(&views, 9, start);

        // Past the timeout but not yet swept: treated like a swept view
        let late = start + cities::VIEW_TIMEOUT + Duration::from_secs(1);
        assert!(views.cities.contains(9));
        assert_eq!(search_scope(&views, 9, late), None);
    }

    #[test]
    fn test_search_scope_refreshes_timeout() {
        let views = Views::default();
        let start = Instant::now();
        city_view(&views, 9, start);

        let half = cities::VIEW_TIMEOUT / 2;
        assert!(search_scope(&views, 9, start + half).is_some());
        let later = start + half + half + Duration::from_secs(1);
        assert!(search_scope(&views, 9, later).is_some());
    }

    #[test]
    fn test_route_unknown() {
        assert_eq!(ComponentRoute::from_custom_id("cities_page"), ComponentRoute::Unknown);
        assert_eq!(ComponentRoute::from_custom_id("whatever"), ComponentRoute::Unknown);
    }
}
