// The timezone role menu.
//
// Every `/reactionroles` post carries the same select menu with the same custom
// id. Interactions are matched on that id in the global event handler rather
// than with a per-message collector, so old menus keep working across restarts.

use super::role_editor::HttpRoleEditor;
use crate::core::roles::{
    apply_role_change, failure_message, resolve, ROLE_MENU_ID, ROLE_MENU_PLACEHOLDER,
    TIMEZONE_ROLES,
};
use crate::discord::guild_cache::guild_snapshot;
use anyhow::Result;
use poise::serenity_prelude as serenity;
use std::collections::HashSet;

pub fn role_menu_row() -> serenity::CreateActionRow {
    let options = TIMEZONE_ROLES
        .iter()
        .map(|role| {
            serenity::CreateSelectMenuOption::new(role.label, role.key)
                .description(role.description)
                .emoji(serenity::ReactionType::Unicode(role.emoji.to_string()))
        })
        .collect();

    let menu = serenity::CreateSelectMenu::new(
        ROLE_MENU_ID,
        serenity::CreateSelectMenuKind::String { options },
    )
    .placeholder(ROLE_MENU_PLACEHOLDER)
    .min_values(0)
    .max_values(1);

    serenity::CreateActionRow::SelectMenu(menu)
}

pub fn is_role_menu(component: &serenity::ComponentInteraction) -> bool {
    component.data.custom_id == ROLE_MENU_ID
}

/// Apply a menu selection and answer the member privately.
pub async fn handle_role_menu(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
) -> Result<()> {
    let (guild_id, member) = match (component.guild_id, component.member.as_ref()) {
        (Some(guild_id), Some(member)) => (guild_id, member),
        _ => return Ok(()),
    };

    let requested_key = match &component.data.kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => {
            values.first().map(String::as_str)
        }
        _ => None,
    };

    let guild = guild_snapshot(ctx, guild_id);
    if guild.is_empty() {
        // Nothing resolves against an empty snapshot, so a pick turns into a clear.
        tracing::warn!(
            guild_id = guild_id.get(),
            user = %member.user.name,
            ?requested_key,
            "Guild not cached; timezone selection will only remove roles"
        );
    }

    let current: HashSet<u64> = member.roles.iter().map(|id| id.get()).collect();
    let change = resolve(&current, requested_key, &guild);

    tracing::info!(
        user = %member.user.name,
        ?requested_key,
        remove = ?change.to_remove,
        add = ?change.to_add,
        "Timezone selection"
    );

    let editor = HttpRoleEditor::new(ctx.http.clone(), guild_id);
    let reply = match apply_role_change(&editor, member.user.id.get(), &change).await {
        Ok(outcome) => outcome.confirmation().to_string(),
        Err(e) => {
            tracing::warn!("Failed to update timezone roles for {}: {}", member.user.name, e);
            failure_message(&e)
        }
    };

    component
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content(reply)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}
