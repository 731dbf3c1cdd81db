use super::config_models::BotConfig;
use anyhow::Result;
use async_trait::async_trait;

/// Where the bot keeps its [`BotConfig`].
///
/// Writes replace the targeted field wholesale; the last write wins.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get_config(&self) -> Result<BotConfig>;
    async fn set_log_channel(&self, channel_id: u64) -> Result<()>;
    async fn set_auto_roles(&self, role_ids: Vec<u64>) -> Result<()>;
}
