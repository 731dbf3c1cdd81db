// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "config/in_memory.rs"]
pub mod config;

#[path = "health/health_server.rs"]
pub mod health;
