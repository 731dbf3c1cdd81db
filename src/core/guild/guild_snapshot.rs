use std::collections::HashSet;

/// The ids a guild currently has, copied out of the Discord cache.
///
/// Routing decisions only need to know whether a channel or role still exists,
/// so the core works with this plain snapshot instead of cache references.
#[derive(Debug, Clone, Default)]
pub struct GuildSnapshot {
    pub channel_ids: HashSet<u64>,
    pub role_ids: HashSet<u64>,
}

impl GuildSnapshot {
    pub fn new(
        channel_ids: impl IntoIterator<Item = u64>,
        role_ids: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            channel_ids: channel_ids.into_iter().collect(),
            role_ids: role_ids.into_iter().collect(),
        }
    }

    pub fn has_channel(&self, channel_id: u64) -> bool {
        self.channel_ids.contains(&channel_id)
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }

    /// True when nothing was copied out, which means the guild was not cached.
    pub fn is_empty(&self) -> bool {
        self.channel_ids.is_empty() && self.role_ids.is_empty()
    }
}
