//! Slash command handler trait
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Handlers resolve the guild language through the context
//! - 1.1.0: Handlers receive the shared data-source context
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;

/// A family of slash commands sharing one data source
///
/// The registry maps every name in `command_names` to the handler, so one
/// handler usually serves a feature: `/anime`, `/manga` and `/season` all
/// go to the Jikan handler. The dispatcher has already applied the
/// command's cooldown group and logged the call when `handle` runs.
///
/// Replies are localized by looking up the guild language first.
///
/// # Example
///
/// ```ignore
/// pub struct CategoriesHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for CategoriesHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["categories"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         serenity_ctx: &Context,
///         command: &ApplicationCommandInteraction,
///     ) -> Result<()> {
///         let lang = ctx.language(command.guild_id.map(|id| id.0)).await;
///         reply_embed(serenity_ctx, command, categories_embed(lang), false).await
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Top-level command names routed to this handler
    fn command_names(&self) -> &'static [&'static str];

    /// Run one invocation of any of `command_names`
    ///
    /// * `ctx` - Settings store, API clients and paged view registries
    /// * `serenity_ctx` - Discord HTTP and cache
    /// * `command` - The interaction; `command.data.name` tells which command
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandRegistry;

    struct SeasonOnly;

    #[async_trait]
    impl SlashCommandHandler for SeasonOnly {
        fn command_names(&self) -> &'static [&'static str] {
            &["season", "randomanime"]
        }

        async fn handle(
            &self,
            _ctx: Arc<CommandContext>,
            _serenity_ctx: &Context,
            _command: &ApplicationCommandInteraction,
        ) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_every_name_routes_to_the_handler() {
        let handler: Arc<dyn SlashCommandHandler> = Arc::new(SeasonOnly);
        let registry = CommandRegistry::from_handlers(vec![Arc::clone(&handler)]).unwrap();
        assert_eq!(registry.len(), 2);
        for name in ["season", "randomanime"] {
            let routed = registry.get(name).unwrap();
            assert!(Arc::ptr_eq(&routed, &handler));
        }
        assert!(registry.get("anime").is_none());
    }

    #[test]
    fn test_overlapping_handlers_are_rejected() {
        let handlers: Vec<Arc<dyn SlashCommandHandler>> = vec![Arc::new(SeasonOnly), Arc::new(SeasonOnly)];
        match CommandRegistry::from_handlers(handlers) {
            Ok(_) => panic!("duplicate names must be rejected"),
            Err(e) => assert!(e.to_string().contains("season")),
        }
    }
}
