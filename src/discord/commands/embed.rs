use crate::core::embeds::{parse_hex_color, DEFAULT_EMBED_COLOR};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Create a custom embed.
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn embed(
    ctx: Context<'_>,
    #[description = "Embed title"] title: String,
    #[description = "Embed description"] description: String,
    #[description = "Embed color (hex code like #FF0000)"] color: Option<String>,
) -> Result<(), Error> {
    let color = color.unwrap_or_else(|| DEFAULT_EMBED_COLOR.to_string());

    // Bad input is the admin's mistake, not a crash: tell them and post nothing.
    let color = match parse_hex_color(&color) {
        Ok(color) => color,
        Err(e) => {
            ctx.send(error_reply(&e)).await?;
            return Ok(());
        }
    };

    let embed = serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .color(color)
        .timestamp(serenity::Timestamp::now())
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Created by {}",
            ctx.author().name
        )));

    if let Err(e) = ctx.send(poise::CreateReply::default().embed(embed)).await {
        tracing::warn!("Failed to post custom embed: {}", e);
        ctx.send(error_reply(&e)).await?;
    }
    Ok(())
}

// Built before any await so no borrowed error is held across it.
fn error_reply(cause: &impl std::fmt::Display) -> poise::CreateReply {
    poise::CreateReply::default()
        .content(format!("❌ Error creating embed: {}", cause))
        .ephemeral(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colour_becomes_private_error_reply() {
        let err = parse_hex_color("GG0000").unwrap_err();
        let reply = error_reply(&err);

        let content = reply.content.unwrap();
        assert!(content.starts_with("❌ Error creating embed: "));
        assert!(content.len() > "❌ Error creating embed: ".len());
        assert_eq!(reply.ephemeral, Some(true));
    }
}
