//! Image slash commands: /waifu, /randomwaifu, /categories

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::features::waifu::CATEGORIES;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_waifu_command(),
        CreateApplicationCommand::default()
            .name("randomwaifu")
            .description("Image from a random category")
            .to_owned(),
        CreateApplicationCommand::default()
            .name("categories")
            .description("List image categories")
            .to_owned(),
    ]
}

fn create_waifu_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("waifu")
        .description("Random anime image")
        .create_option(|option| {
            option
                .name("category")
                .description("Image category (default: waifu)")
                .kind(CommandOptionType::String)
                .required(false);
            for (category, _) in CATEGORIES {
                option.add_string_choice(category, category);
            }
            option
        });
    command
}
