//! Utility slash commands: /ping, /help, /info, /stats

use serenity::builder::CreateApplicationCommand;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_simple("ping", "Check bot latency"),
        create_simple("help", "Browse commands by category"),
        create_simple("info", "About the bot"),
        create_simple("stats", "Command usage statistics"),
    ]
}

fn create_simple(name: &str, description: &str) -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name(name)
        .description(description)
        .to_owned()
}
