use anyhow::Result;
use async_trait::async_trait;

/// Port for changing a member's roles in the guild.
///
/// The Discord layer implements this over the HTTP client; tests use a recorder.
#[async_trait]
pub trait RoleEditor: Send + Sync {
    async fn add_role(&self, user_id: u64, role_id: u64) -> Result<()>;
    async fn remove_role(&self, user_id: u64, role_id: u64) -> Result<()>;
}
