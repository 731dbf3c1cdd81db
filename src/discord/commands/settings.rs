// Admin commands that change the bot's runtime config.
//
// Same thin-layer pattern as everywhere else: pull ids out of the Discord
// types, hand them to the config service, report back.

use crate::discord::{Context, Error};
use poise::serenity_prelude::{self as serenity, Mentionable};

/// Set the channel for message logs.
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn setlogchannel(
    ctx: Context<'_>,
    #[description = "The log channel"]
    #[channel_types("Text")]
    channel: serenity::GuildChannel,
) -> Result<(), Error> {
    ctx.data().config.set_log_channel(channel.id.get()).await?;

    ctx.send(
        poise::CreateReply::default()
            .content(format!("✅ Log channel set to {}", channel.mention()))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Set roles to auto-assign on member join.
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn setautoroles(
    ctx: Context<'_>,
    #[description = "First role"] role1: serenity::Role,
    #[description = "Second role (optional)"] role2: Option<serenity::Role>,
    #[description = "Third role (optional)"] role3: Option<serenity::Role>,
) -> Result<(), Error> {
    let roles: Vec<serenity::Role> = std::iter::once(role1).chain(role2).chain(role3).collect();

    ctx.data()
        .config
        .set_auto_roles(roles.iter().map(|role| role.id.get()).collect())
        .await?;

    let role_mentions = roles
        .iter()
        .map(|role| role.mention().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    ctx.send(
        poise::CreateReply::default()
            .content(format!(
                "✅ Auto-roles updated! New members will receive: {}",
                role_mentions
            ))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Show the current log channel and auto-roles.
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn botconfig(ctx: Context<'_>) -> Result<(), Error> {
    let config = ctx.data().config.get_config().await?;

    let log_channel = config
        .log_channel_id
        .map(|id| format!("<#{}>", id))
        .unwrap_or_else(|| "Not set".to_string());
    let auto_roles = if config.auto_role_ids.is_empty() {
        "None".to_string()
    } else {
        config
            .auto_role_ids
            .iter()
            .map(|id| format!("<@&{}>", id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let embed = serenity::CreateEmbed::default()
        .title("Bot Configuration")
        .color(serenity::Color::BLURPLE)
        .field("Log Channel", log_channel, false)
        .field("Auto-Roles", auto_roles, false)
        .field(
            "Logged Events",
            "• Message Edit/Delete\n• Voice Join/Leave/Switch\n• Role Added/Removed",
            false,
        )
        .footer(serenity::CreateEmbedFooter::new(
            "Settings reset to defaults when the bot restarts.",
        ))
        .timestamp(serenity::Timestamp::now());

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}
