// Discord layer - commands and event handlers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "logging/mod.rs"]
pub mod logging;

#[path = "roles/mod.rs"]
pub mod roles;

pub mod guild_cache;

use crate::core::config::ConfigService;
use crate::core::logging::LoggingService;
use crate::infra::config::InMemoryConfigStore;
use std::sync::Arc;

/// Type alias for our bot's context.
/// This is what every command receives as its first parameter.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands and event handlers.
/// The config store lives here instead of in a global.
pub struct Data {
    pub config: Arc<ConfigService<InMemoryConfigStore>>,
    pub logging: Arc<LoggingService>,
}
