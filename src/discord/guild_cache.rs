// Copies what the core needs out of Serenity's cache.
//
// Cache references must not be held across an await, so everything here
// returns owned data.

use crate::core::guild::GuildSnapshot;
use crate::core::logging::UserRef;
use poise::serenity_prelude as serenity;

/// Channel and role ids of a guild. Empty if the guild isn't cached,
/// which makes every lookup fail the same way a deleted channel would.
pub fn guild_snapshot(ctx: &serenity::Context, guild_id: serenity::GuildId) -> GuildSnapshot {
    match ctx.cache.guild(guild_id) {
        Some(guild) => GuildSnapshot::new(
            guild.channels.keys().map(|id| id.get()),
            guild.roles.keys().map(|id| id.get()),
        ),
        None => {
            tracing::debug!(guild_id = guild_id.get(), "Guild not in cache");
            GuildSnapshot::default()
        }
    }
}

pub fn user_ref(user: &serenity::User) -> UserRef {
    UserRef {
        id: user.id.get(),
        name: user.name.clone(),
        avatar_url: user.face(),
        bot: user.bot,
    }
}
