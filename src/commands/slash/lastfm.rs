//! # Last.fm Command
//!
//! Single `/lastfm` command with one subcommand per lookup.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: `album` and `artist` subcommands
//! - 1.0.0: Initial implementation

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::features::lastfm::Period;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_lastfm_command()]
}

fn create_lastfm_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("lastfm")
        .description("Last.fm scrobbles")
        .create_option(|sub| {
            sub.name("set")
                .description("Link your Last.fm account")
                .kind(CommandOptionType::SubCommand)
                .create_sub_option(|o| {
                    o.name("username")
                        .description("Last.fm username")
                        .kind(CommandOptionType::String)
                        .required(true)
                })
        })
        .create_option(|sub| {
            sub.name("np")
                .description("What you are listening to now")
                .kind(CommandOptionType::SubCommand)
        })
        .create_option(|sub| {
            sub.name("recent")
                .description("Recently played tracks")
                .kind(CommandOptionType::SubCommand)
                .create_sub_option(|o| {
                    o.name("username")
                        .description("Any Last.fm user (default: your linked account)")
                        .kind(CommandOptionType::String)
                        .required(false)
                })
        });
    for (name, description) in [("topartists", "Your top artists"), ("topalbums", "Your top albums")] {
        command.create_option(|sub| {
            sub.name(name)
                .description(description)
                .kind(CommandOptionType::SubCommand)
                .create_sub_option(|o| {
                    o.name("period")
                        .description("Time range (default: overall)")
                        .kind(CommandOptionType::String)
                        .required(false);
                    for period in Period::ALL {
                        o.add_string_choice(period.display(), period.api_value());
                    }
                    o
                })
        });
    }
    command
        .create_option(|sub| {
            sub.name("album")
                .description("Album info with your play count")
                .kind(CommandOptionType::SubCommand)
                .create_sub_option(|o| {
                    o.name("album")
                        .description("Album title")
                        .kind(CommandOptionType::String)
                        .required(true)
                })
                .create_sub_option(|o| {
                    o.name("artist")
                        .description("Album artist (default: best search match)")
                        .kind(CommandOptionType::String)
                        .required(false)
                })
        })
        .create_option(|sub| {
            sub.name("artist")
                .description("Artist info with your play count")
                .kind(CommandOptionType::SubCommand)
                .create_sub_option(|o| {
                    o.name("name")
                        .description("Artist name")
                        .kind(CommandOptionType::String)
                        .required(true)
                })
        });
    command
}
