//! Guild setting slash commands: /prefix, /language

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::features::i18n::Language;
use crate::features::settings::MAX_PREFIX_LEN;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_prefix_command(), create_language_command()]
}

fn create_prefix_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("prefix")
        .description("View or change the text command prefix")
        .create_option(|option| {
            option
                .name("new_prefix")
                .description("New prefix, 1-5 characters without spaces")
                .kind(CommandOptionType::String)
                .required(false)
                .min_length(1)
                .max_length(MAX_PREFIX_LEN as u16)
        })
        .to_owned()
}

fn create_language_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("language")
        .description("View or change the bot language for this server")
        .create_option(|option| {
            option
                .name("code")
                .description("Language to use")
                .kind(CommandOptionType::String)
                .required(false);
            for language in Language::ALL {
                option.add_string_choice(language.display_name(), language.code());
            }
            option
        });
    command
}
