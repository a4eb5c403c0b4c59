//! Interaction response helpers shared by the command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from the per-command response blocks

use anyhow::Result;
use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use crate::core::truncate_for_message;

pub async fn reply_text(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
    ephemeral: bool,
) -> Result<()> {
    let content = truncate_for_message(content);
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(ephemeral))
        })
        .await?;
    Ok(())
}

pub async fn reply_embed(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    embed: CreateEmbed,
    ephemeral: bool,
) -> Result<()> {
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.set_embed(embed).ephemeral(ephemeral))
        })
        .await?;
    Ok(())
}

/// Acknowledge now, answer later with `edit_*`
pub async fn defer(ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
    command
        .create_interaction_response(&ctx.http, |response| {
            response.kind(InteractionResponseType::DeferredChannelMessageWithSource)
        })
        .await?;
    Ok(())
}

pub async fn edit_text(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    content: &str,
) -> Result<()> {
    let content = truncate_for_message(content);
    command
        .edit_original_interaction_response(&ctx.http, |response| response.content(content))
        .await?;
    Ok(())
}

pub async fn edit_embed(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    embed: CreateEmbed,
) -> Result<()> {
    command
        .edit_original_interaction_response(&ctx.http, |response| response.set_embed(embed))
        .await?;
    Ok(())
}

/// Replace a deferred response with an embed and components.
///
/// Returns the message id that paged sessions are keyed by.
pub async fn edit_view(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    embed: CreateEmbed,
    components: CreateComponents,
) -> Result<u64> {
    let message = command
        .edit_original_interaction_response(&ctx.http, |response| {
            response.set_embed(embed).set_components(components)
        })
        .await?;
    Ok(message.id.0)
}

/// Send a fresh embed with components, returning the message id
pub async fn reply_view(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    embed: CreateEmbed,
    components: CreateComponents,
) -> Result<u64> {
    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| {
                    message.set_embed(embed).set_components(components)
                })
        })
        .await?;
    let message = command.get_interaction_response(&ctx.http).await?;
    Ok(message.id.0)
}
