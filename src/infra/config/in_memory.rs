// In-memory implementation of ConfigStore.
//
// Config is intentionally volatile: a restart brings back `BotConfig::default()`.
// The RwLock lets every event handler take a cheap read snapshot while admin
// commands write one at a time.

use crate::core::config::{BotConfig, ConfigStore};
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct InMemoryConfigStore {
    config: RwLock<BotConfig>,
}

impl InMemoryConfigStore {
    pub fn new(initial: BotConfig) -> Self {
        Self {
            config: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get_config(&self) -> Result<BotConfig> {
        Ok(self.config.read().await.clone())
    }

    async fn set_log_channel(&self, channel_id: u64) -> Result<()> {
        self.config.write().await.log_channel_id = Some(channel_id);
        Ok(())
    }

    async fn set_auto_roles(&self, role_ids: Vec<u64>) -> Result<()> {
        self.config.write().await.auto_role_ids = role_ids;
        Ok(())
    }
}

// Default trait implementation for convenient initialization
impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}
