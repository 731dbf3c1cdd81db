// Core logging module - decides which guild events end up in the log channel.
// Following the same pattern as the roles module: no serenity types in here.

pub mod logging_models;
pub mod logging_service;

pub use logging_models::*;
pub use logging_service::*;
