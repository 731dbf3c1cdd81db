// Serenity event adapters for logging and auto-roles.
//
// Each handler copies what it needs out of the serenity types into a
// `GuildEvent`, lets the core router decide, then performs the resulting
// actions. Failures are logged here and never bubble up to the framework.

use crate::core::logging::{GuildEvent, LogEntry, RouteAction, SkipReason, TrackedMessage};
use crate::core::roles::grant_auto_roles;
use crate::discord::guild_cache::{guild_snapshot, user_ref};
use crate::discord::logging::formatter::format_log_entry;
use crate::discord::roles::role_editor::HttpRoleEditor;
use crate::discord::Data;
use anyhow::Result;
use poise::serenity_prelude::{self as serenity, Context};

/// Keep a snapshot of every guild message so deletes and edits can be logged
/// even after Serenity's cache drops it.
pub fn remember_message(data: &Data, message: &serenity::Message) {
    if let Some(guild_id) = message.guild_id {
        data.logging
            .remember_message(track_message(message, guild_id.get()));
    }
}

pub async fn handle_member_join(ctx: &Context, data: &Data, member: &serenity::Member) -> Result<()> {
    tracing::info!("New member joined: {}", member.user.name);

    let event = GuildEvent::MemberJoined {
        member: user_ref(&member.user),
    };
    dispatch(ctx, data, member.guild_id, event).await
}

pub async fn handle_message_delete(
    ctx: &Context,
    data: &Data,
    channel_id: serenity::ChannelId,
    message_id: serenity::MessageId,
    guild_id: Option<serenity::GuildId>,
) -> Result<()> {
    let guild_id = match guild_id {
        Some(id) => id,
        None => return Ok(()),
    };

    // Prefer our own snapshot over the Serenity cache so we never miss deletes.
    let snapshot = data
        .logging
        .take_tracked_message(message_id.get())
        .or_else(|| {
            ctx.cache
                .message(channel_id, message_id)
                .map(|message| track_message(&message, guild_id.get()))
        });

    let snapshot = match snapshot {
        Some(msg) if msg.guild_id == guild_id.get() => msg,
        _ => {
            skipped("message_delete", SkipReason::MessageNotCached);
            return Ok(());
        }
    };

    tracing::info!(
        "Message deleted: \"{}\" by {}",
        snapshot.content,
        snapshot.author.name
    );

    dispatch(ctx, data, guild_id, GuildEvent::MessageDeleted { message: snapshot }).await
}

pub async fn handle_message_update(
    ctx: &Context,
    data: &Data,
    old: Option<&serenity::Message>,
    event: &serenity::MessageUpdateEvent,
) -> Result<()> {
    let guild_id = match event.guild_id {
        Some(id) => id,
        None => return Ok(()),
    };

    // Embed unfurls and pins arrive as updates without content.
    let new_content = match &event.content {
        Some(content) => content.clone(),
        None => {
            skipped("message_edit", SkipReason::ContentUnchanged);
            return Ok(());
        }
    };

    let message_id = event.id.get();
    let tracked = data
        .logging
        .get_tracked_message(message_id)
        .or_else(|| old.map(|message| track_message(message, guild_id.get())));

    let tracked = match tracked {
        Some(tracked) => tracked,
        None => {
            skipped("message_edit", SkipReason::MessageNotCached);
            return Ok(());
        }
    };

    tracing::info!("Message edited by {}", tracked.author.name);

    let guild_event = GuildEvent::MessageEdited {
        guild_id: guild_id.get(),
        channel_id: tracked.channel_id,
        message_id,
        author: tracked.author.clone(),
        before: tracked.content.clone(),
        after: new_content.clone(),
    };

    // Keep the snapshot current so the next edit/delete shows the latest text.
    data.logging.remember_message(TrackedMessage {
        content: new_content,
        ..tracked
    });

    dispatch(ctx, data, guild_id, guild_event).await
}

pub async fn handle_voice_state_update(
    ctx: &Context,
    data: &Data,
    old: Option<&serenity::VoiceState>,
    new: &serenity::VoiceState,
) -> Result<()> {
    let guild_id = match new.guild_id {
        Some(id) => id,
        None => return Ok(()),
    };

    let member = match new.member.as_ref() {
        Some(m) => m,
        None => return Ok(()),
    };

    tracing::debug!("Voice state update for {}", member.user.name);

    let event = GuildEvent::VoiceStateChanged {
        member: user_ref(&member.user),
        before_channel_id: old.and_then(|s| s.channel_id).map(|id| id.get()),
        after_channel_id: new.channel_id.map(|id| id.get()),
    };
    dispatch(ctx, data, guild_id, event).await
}

pub async fn handle_member_update(
    ctx: &Context,
    data: &Data,
    old: Option<&serenity::Member>,
    event: &serenity::GuildMemberUpdateEvent,
) -> Result<()> {
    let old = match old {
        Some(old) => old,
        None => {
            skipped("member_update", SkipReason::MemberNotCached);
            return Ok(());
        }
    };

    let mut member = user_ref(&event.user);
    member.bot |= old.user.bot;

    let event_data = GuildEvent::MemberRolesChanged {
        member,
        before_role_ids: old.roles.iter().map(|id| id.get()).collect(),
        after_role_ids: event.roles.iter().map(|id| id.get()).collect(),
    };
    dispatch(ctx, data, event.guild_id, event_data).await
}

/// Route an event through the core and carry out whatever it asks for.
async fn dispatch(
    ctx: &Context,
    data: &Data,
    guild_id: serenity::GuildId,
    event: GuildEvent,
) -> Result<()> {
    let config = data.config.get_config().await?;
    let guild = guild_snapshot(ctx, guild_id);

    let actions = match data.logging.route(&event, &config, &guild) {
        Ok(actions) => actions,
        Err(reason) => {
            skipped(event.name(), reason);
            return Ok(());
        }
    };

    for action in actions {
        match action {
            RouteAction::SendLog { channel_id, entry } => send_log(ctx, channel_id, &entry).await,
            RouteAction::GrantRoles { user_id, role_ids } => {
                let editor = HttpRoleEditor::new(ctx.http.clone(), guild_id);
                let report = grant_auto_roles(&editor, user_id, &role_ids).await;
                if !report.failed.is_empty() {
                    tracing::warn!(
                        user_id,
                        granted = report.granted.len(),
                        failed = report.failed.len(),
                        "Some auto-roles could not be assigned"
                    );
                }
            }
        }
    }

    Ok(())
}

async fn send_log(ctx: &Context, channel_id: u64, entry: &LogEntry) {
    let embed = format_log_entry(entry);
    let channel = serenity::ChannelId::new(channel_id);

    match channel
        .send_message(&ctx.http, serenity::CreateMessage::new().embed(embed))
        .await
    {
        Ok(_) => tracing::debug!(kind = ?entry.event.kind(), "Logged to channel {}", channel_id),
        Err(e) => tracing::warn!("Failed to send log to channel {}: {}", channel_id, e),
    }
}

fn skipped(event: &str, reason: SkipReason) {
    tracing::debug!(event, "Not logging: {}", reason);
}

fn track_message(message: &serenity::Message, guild_id: u64) -> TrackedMessage {
    TrackedMessage {
        message_id: message.id.get(),
        guild_id,
        channel_id: message.channel_id.get(),
        author: user_ref(&message.author),
        content: message.content.clone(),
    }
}
