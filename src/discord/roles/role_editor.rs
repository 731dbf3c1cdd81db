use crate::core::roles::RoleEditor;
use anyhow::Result;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// [`RoleEditor`] backed by Discord's REST API for a single guild.
pub struct HttpRoleEditor {
    http: Arc<serenity::Http>,
    guild_id: serenity::GuildId,
}

impl HttpRoleEditor {
    pub fn new(http: Arc<serenity::Http>, guild_id: serenity::GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl RoleEditor for HttpRoleEditor {
    async fn add_role(&self, user_id: u64, role_id: u64) -> Result<()> {
        self.http
            .add_member_role(
                self.guild_id,
                serenity::UserId::new(user_id),
                serenity::RoleId::new(role_id),
                None,
            )
            .await?;
        Ok(())
    }

    async fn remove_role(&self, user_id: u64, role_id: u64) -> Result<()> {
        self.http
            .remove_member_role(
                self.guild_id,
                serenity::UserId::new(user_id),
                serenity::RoleId::new(role_id),
                None,
            )
            .await?;
        Ok(())
    }
}
