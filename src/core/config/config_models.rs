/// Log channel used until an admin runs `/setlogchannel`.
pub const DEFAULT_LOG_CHANNEL_ID: u64 = 1446405582356746382;
/// Roles handed to every new member until an admin runs `/setautoroles`.
pub const DEFAULT_AUTO_ROLE_IDS: [u64; 1] = [1343398705965043734];
/// `/setautoroles` exposes three role slots.
pub const MAX_AUTO_ROLES: usize = 3;

/// Runtime settings that admins can change with slash commands.
///
/// Lives only in memory, so a restart puts everything back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub log_channel_id: Option<u64>,
    /// Granted in this order when a member joins.
    pub auto_role_ids: Vec<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_channel_id: Some(DEFAULT_LOG_CHANNEL_ID),
            auto_role_ids: DEFAULT_AUTO_ROLE_IDS.to_vec(),
        }
    }
}
