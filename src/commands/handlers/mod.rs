//! Per-command handler implementations
//!
//! - **Version**: 3.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 3.0.0: Data-source handlers (anime, waifu, lastfm, sekolah, imsakiyah) and settings
//! - 1.0.0: Initial extraction from monolithic command_handler.rs

pub mod anime;
pub mod imsakiyah;
pub mod lastfm;
pub mod school;
pub mod settings;
pub mod utility;
pub mod waifu;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(settings::SettingsHandler),
        Arc::new(waifu::WaifuHandler),
        Arc::new(anime::AnimeHandler),
        Arc::new(lastfm::LastfmHandler),
        Arc::new(school::SchoolHandler),
        Arc::new(imsakiyah::ImsakiyahHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandRegistry;
    use crate::commands::slash::create_slash_commands;

    #[test]
    fn test_every_slash_command_has_one_handler() {
        let registry = CommandRegistry::from_handlers(create_all_handlers()).unwrap();
        let commands = create_slash_commands();
        for command in &commands {
            let name = command.0.get("name").and_then(|v| v.as_str()).unwrap();
            assert!(registry.contains(name), "No handler for /{name}");
        }
        assert_eq!(registry.len(), commands.len());
    }
}
