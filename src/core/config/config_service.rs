use super::config_models::{BotConfig, MAX_AUTO_ROLES};
use super::config_store::ConfigStore;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
    #[error("At least one auto-role is required")]
    NoAutoRoles,
    #[error("At most 3 auto-roles can be set, got {0}")]
    TooManyAutoRoles(usize),
}

pub struct ConfigService<S: ConfigStore> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Snapshot of the current settings. Event handlers take one per event.
    pub async fn get_config(&self) -> Result<BotConfig, ConfigError> {
        Ok(self.store.get_config().await?)
    }

    pub async fn set_log_channel(&self, channel_id: u64) -> Result<(), ConfigError> {
        self.store.set_log_channel(channel_id).await?;
        tracing::info!(channel_id, "Log channel updated");
        Ok(())
    }

    /// Replace the auto-role list. Order is kept because grants run in that order.
    pub async fn set_auto_roles(&self, role_ids: Vec<u64>) -> Result<(), ConfigError> {
        if role_ids.is_empty() {
            return Err(ConfigError::NoAutoRoles);
        }
        if role_ids.len() > MAX_AUTO_ROLES {
            return Err(ConfigError::TooManyAutoRoles(role_ids.len()));
        }

        tracing::info!(?role_ids, "Auto-roles updated");
        self.store.set_auto_roles(role_ids).await?;
        Ok(())
    }
}
