//! # Slash Commands (/)
//!
//! Discord native slash command definitions and registration.
//!
//! - **Version**: 3.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Data-source commands; every name defined exactly once
//! - 2.0.0: Subcommand helpers for grouped commands
//! - 1.0.0: Reorganized from monolithic slash_commands.rs

mod anime;
mod indonesia;
mod lastfm;
mod settings;
mod utility;
mod waifu;

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::application_command::CommandDataOption;
use serenity::model::id::GuildId;
use serenity::prelude::Context;

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    let mut commands = Vec::new();

    commands.extend(utility::create_commands());
    commands.extend(settings::create_commands());
    commands.extend(waifu::create_commands());
    commands.extend(anime::create_commands());
    commands.extend(lastfm::create_commands());
    commands.extend(indonesia::create_commands());

    commands
}

/// Registers all slash commands globally
pub async fn register_global_commands(ctx: &Context) -> Result<()> {
    let slash_commands = create_slash_commands();
    let count = slash_commands.len();

    Command::set_global_application_commands(&ctx.http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!("Global slash commands registered successfully ({count} commands)");
    Ok(())
}

/// Registers all slash commands for a specific guild (instant updates while developing)
pub async fn register_guild_commands(ctx: &Context, guild_id: GuildId) -> Result<()> {
    let slash_commands = create_slash_commands();
    let count = slash_commands.len();

    guild_id
        .set_application_commands(&ctx.http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!("Guild slash commands registered for guild {guild_id} ({count} commands)");
    Ok(())
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Utility function to get integer option from slash command
pub fn get_integer_option(options: &[CommandDataOption], name: &str) -> Option<i64> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_i64())
}

/// Subcommand name and its nested options
pub fn get_subcommand(options: &[CommandDataOption]) -> Option<(&str, &[CommandDataOption])> {
    options
        .first()
        .map(|opt| (opt.name.as_str(), opt.options.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(commands: &[CreateApplicationCommand]) -> Vec<String> {
        commands
            .iter()
            .map(|cmd| cmd.0.get("name").unwrap().as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_create_slash_commands() {
        let names = names(&create_slash_commands());
        let expected = [
            "ping", "help", "info", "stats", "prefix", "language", "waifu", "randomwaifu",
            "categories", "anime", "manga", "character", "topanime", "topmanga", "season",
            "randomanime", "lastfm", "sekolah", "imsakiyah",
        ];
        for command in expected {
            assert!(names.contains(&command.to_string()), "Missing command: {command}");
        }
        assert_eq!(names.len(), expected.len());
    }

    #[test]
    fn test_command_names_are_unique() {
        let names = names(&create_slash_commands());
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_waifu_choices_fit_discord_limit() {
        let commands = create_slash_commands();
        let waifu = commands
            .iter()
            .find(|c| c.0.get("name").and_then(|v| v.as_str()) == Some("waifu"))
            .unwrap();
        let choices = waifu.0["options"][0]["choices"].as_array().unwrap();
        assert!(choices.len() <= 25);
    }
}
