// This module handles bot presence.
//
// Discord-layer glue only: we work with SDK types (Context, ActivityData,
// OnlineStatus) and keep it short.

use poise::serenity_prelude as serenity;

/// Shown under the bot's name while it is online.
const DEFAULT_ACTIVITY: &str = "the server logs";

/// Called once the bot is ready so the member list shows what it is doing.
pub fn on_ready(ctx: &serenity::Context) {
    let activity = serenity::ActivityData::watching(DEFAULT_ACTIVITY);
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
