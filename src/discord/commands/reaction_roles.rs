use crate::discord::roles::role_menu::role_menu_row;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Create a persistent reaction role menu.
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn reactionroles(
    ctx: Context<'_>,
    #[description = "Menu title"] title: String,
) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title(title)
        .description(
            "Select your roles from the dropdown below!\n\n\
             **This menu will stay active even after bot restarts.**",
        )
        .color(0x2ECC71);

    ctx.send(
        poise::CreateReply::default()
            .embed(embed)
            .components(vec![role_menu_row()]),
    )
    .await?;
    Ok(())
}
