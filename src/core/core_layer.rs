// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "config/mod.rs"]
pub mod config;

#[path = "guild/guild_snapshot.rs"]
pub mod guild;

#[path = "logging/mod.rs"]
pub mod logging;

#[path = "roles/mod.rs"]
pub mod roles;

#[path = "embeds/embed_color.rs"]
pub mod embeds;
