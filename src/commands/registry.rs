//! Command handler registry
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Reject a command name claimed by two handlers
//! - 1.0.0: Initial implementation for handler dispatch

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Registry mapping command names to handlers
///
/// Every name maps to exactly one handler; registering a name twice is an
/// error so a command can never be silently shadowed.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(UtilityHandler))?;
///
/// if let Some(handler) = registry.get("ping") {
///     handler.handle(ctx, serenity_ctx, command).await?;
/// }
/// ```
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a handler list, failing on the first duplicate
    pub fn from_handlers(handlers: Vec<Arc<dyn SlashCommandHandler>>) -> Result<Self> {
        let mut registry = Self::new();
        for handler in handlers {
            registry.register(handler)?;
        }
        Ok(registry)
    }

    /// Register a handler for all names returned by `command_names()`
    ///
    /// Nothing is registered if any of the names is already taken.
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) -> Result<()> {
        if let Some(taken) = handler
            .command_names()
            .iter()
            .find(|name| self.handlers.contains_key(*name))
        {
            return Err(anyhow!("Command '{taken}' is registered twice"));
        }
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names, not unique handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn command_names(&self) -> impl Iterator<Item = &&'static str> {
        self.handlers.keys()
    }
}
