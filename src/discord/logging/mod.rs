// Discord adapters for activity logging: serenity events in, embeds out.

pub mod events;
pub mod formatter;
