//! MyAnimeList slash commands: /anime, /manga, /character, /topanime,
//! /topmanga, /season, /randomanime

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::features::anime::{Season, TOP_MANGA_SUBTYPES, TOP_SUBTYPES};

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_search_command("anime", "Look up an anime on MyAnimeList", "Anime title"),
        create_search_command("manga", "Look up a manga on MyAnimeList", "Manga title"),
        create_search_command("character", "Look up an anime character", "Character name"),
        create_top_command("topanime", "Top-rated anime", TOP_SUBTYPES),
        create_top_command("topmanga", "Top-rated manga", TOP_MANGA_SUBTYPES),
        create_season_command(),
        CreateApplicationCommand::default()
            .name("randomanime")
            .description("A random anime from MyAnimeList")
            .to_owned(),
    ]
}

fn create_search_command(name: &str, description: &str, query: &str) -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name(name)
        .description(description)
        .create_option(|option| {
            option
                .name("query")
                .description(query)
                .kind(CommandOptionType::String)
                .required(true)
                .min_length(1)
                .max_length(100)
        })
        .to_owned()
}

fn create_top_command(name: &str, description: &str, subtypes: &[&str]) -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name(name)
        .description(description)
        .create_option(|option| {
            option
                .name("subtype")
                .description("Narrow the ranking")
                .kind(CommandOptionType::String)
                .required(false);
            for subtype in subtypes {
                option.add_string_choice(subtype, subtype);
            }
            option
        });
    command
}

fn create_season_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("season")
        .description("Random picks from a seasonal anime lineup")
        .create_option(|option| {
            option
                .name("season")
                .description("Defaults to the current season")
                .kind(CommandOptionType::String)
                .required(false);
            for season in Season::ALL {
                option.add_string_choice(season.id(), season.id());
            }
            option
        })
        .create_option(|option| {
            option
                .name("year")
                .description("Defaults to the current year")
                .kind(CommandOptionType::Integer)
                .required(false)
        });
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_command_options() {
        let command = create_season_command();
        let options = command.0["options"].as_array().unwrap();
        assert_eq!(options.len(), 2);
        let choices = options[0]["choices"].as_array().unwrap();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[3]["value"].as_str(), Some("fall"));
        assert_eq!(options[1]["name"].as_str(), Some("year"));
    }

    #[test]
    fn test_top_manga_choices() {
        let command = create_top_command("topmanga", "Top-rated manga", TOP_MANGA_SUBTYPES);
        let choices = command.0["options"][0]["choices"].as_array().unwrap();
        assert_eq!(choices.len(), TOP_MANGA_SUBTYPES.len());
    }
}
