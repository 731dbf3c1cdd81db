use crate::core::logging::{LogEntry, LogEvent, UserRef};
use poise::serenity_prelude::{self as serenity, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

const RED: u32 = 0xE74C3C;
const GOLD: u32 = 0xF1C40F;
const BLUE: u32 = 0x3498DB;
const GREEN: u32 = 0x2ECC71;

// Embed descriptions cap at 4096 characters and field values at 1024.
const MAX_DELETED_CONTENT: usize = 4000;
const MAX_EDITED_CONTENT: usize = 1900;
const MAX_FIELD_VALUE: usize = 1024;

pub fn format_log_entry(entry: &LogEntry) -> CreateEmbed {
    let embed = match &entry.event {
        LogEvent::MessageDeleted {
            channel_id,
            content,
            ..
        } => CreateEmbed::default()
            .color(RED)
            .description(deleted_description(content))
            .field("Message deleted in", format!("<#{}>", channel_id), false),

        LogEvent::MessageEdited {
            channel_id,
            before,
            after,
            jump_url,
            ..
        } => CreateEmbed::default()
            .color(GOLD)
            .description(edited_description(before, after))
            .field(
                "Message edited in",
                truncate(
                    &format!("<#{}> - [Jump to message]({})", channel_id, jump_url),
                    MAX_FIELD_VALUE,
                ),
                false,
            ),

        LogEvent::VoiceJoined { channel_id, .. } => CreateEmbed::default()
            .color(BLUE)
            .title("Member joined voice channel")
            .field("Channel", voice_channel(*channel_id), false),

        LogEvent::VoiceLeft { channel_id, .. } => CreateEmbed::default()
            .color(RED)
            .title("Member left voice channel")
            .field("Channel", voice_channel(*channel_id), false),

        LogEvent::VoiceSwitched {
            from_channel_id,
            to_channel_id,
            ..
        } => CreateEmbed::default()
            .color(BLUE)
            .title("Member changed voice channel")
            .field("Before", voice_channel(*from_channel_id), true)
            .field("After", voice_channel(*to_channel_id), true),

        LogEvent::RoleAdded { role_id, .. } => CreateEmbed::default()
            .color(GREEN)
            .title("Role added")
            .description(format!("<@&{}>", role_id)),

        LogEvent::RoleRemoved { role_id, .. } => CreateEmbed::default()
            .color(RED)
            .title("Role removed")
            .description(format!("<@&{}>", role_id)),
    };

    with_actor(embed, entry.event.actor()).timestamp(timestamp(entry))
}

/// Every log entry shows who it is about in the author line and footer.
fn with_actor(embed: CreateEmbed, actor: &UserRef) -> CreateEmbed {
    embed
        .author(CreateEmbedAuthor::new(format!("@{}", actor.name)).icon_url(&actor.avatar_url))
        .footer(CreateEmbedFooter::new(format!("User ID: {}", actor.id)))
}

fn timestamp(entry: &LogEntry) -> serenity::Timestamp {
    serenity::Timestamp::from_unix_timestamp(entry.logged_at.timestamp())
        .unwrap_or_else(|_| serenity::Timestamp::now())
}

fn voice_channel(channel_id: u64) -> String {
    format!("🔊 • <#{}>", channel_id)
}

fn deleted_description(content: &str) -> String {
    let content = if content.is_empty() {
        "*No content (might be embed/attachment)*".to_string()
    } else {
        truncate(content, MAX_DELETED_CONTENT)
    };
    format!("**Content**\n{}", content)
}

fn edited_description(before: &str, after: &str) -> String {
    format!(
        "**Old**\n{}\n\n**New**\n{}",
        or_placeholder(before),
        or_placeholder(after)
    )
}

fn or_placeholder(content: &str) -> String {
    if content.is_empty() {
        "*No content*".to_string()
    } else {
        truncate(content, MAX_EDITED_CONTENT)
    }
}

/// Cut to `max_chars` characters (not bytes), marking the cut with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
