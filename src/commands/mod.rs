//! # Command System
//!
//! Slash command (/) handling for Discord interactions.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Shared reply helpers; registry rejects duplicate names
//! - 2.1.0: Add modular handler infrastructure (handler trait, context, registry)
//! - 1.0.0: Initial reorganization with modular command structure

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod reply;
pub mod slash;

pub use crate::command_handler::CommandHandler;

// Re-export handler infrastructure
pub use context::{CommandContext, Views};
pub use handler::SlashCommandHandler;
pub use registry::CommandRegistry;

pub use slash::{
    create_slash_commands, get_integer_option, get_string_option, get_subcommand,
    register_global_commands, register_guild_commands,
};
