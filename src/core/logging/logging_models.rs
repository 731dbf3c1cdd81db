use chrono::{DateTime, Utc};

/// The parts of a Discord user a log entry shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: u64,
    pub name: String,
    pub avatar_url: String,
    pub bot: bool,
}

/// Minimal snapshot of a message that we keep in-memory so
/// deletions/edits can be logged even if Serenity's cache
/// has already evicted the original message.
#[derive(Debug, Clone)]
pub struct TrackedMessage {
    pub message_id: u64,
    pub guild_id: u64,
    pub channel_id: u64,
    pub author: UserRef,
    pub content: String,
}

/// Guild events the router knows how to handle, with the fields it needs.
#[derive(Debug, Clone)]
pub enum GuildEvent {
    MemberJoined {
        member: UserRef,
    },
    MessageDeleted {
        message: TrackedMessage,
    },
    MessageEdited {
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
        author: UserRef,
        before: String,
        after: String,
    },
    VoiceStateChanged {
        member: UserRef,
        before_channel_id: Option<u64>,
        after_channel_id: Option<u64>,
    },
    MemberRolesChanged {
        member: UserRef,
        before_role_ids: Vec<u64>,
        after_role_ids: Vec<u64>,
    },
}

impl GuildEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GuildEvent::MemberJoined { .. } => "member_join",
            GuildEvent::MessageDeleted { .. } => "message_delete",
            GuildEvent::MessageEdited { .. } => "message_edit",
            GuildEvent::VoiceStateChanged { .. } => "voice_state_update",
            GuildEvent::MemberRolesChanged { .. } => "member_update",
        }
    }
}

/// A single entry for the log channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    MessageDeleted {
        author: UserRef,
        channel_id: u64,
        content: String,
    },
    MessageEdited {
        author: UserRef,
        channel_id: u64,
        before: String,
        after: String,
        jump_url: String,
    },
    VoiceJoined {
        member: UserRef,
        channel_id: u64,
    },
    VoiceLeft {
        member: UserRef,
        channel_id: u64,
    },
    VoiceSwitched {
        member: UserRef,
        from_channel_id: u64,
        to_channel_id: u64,
    },
    RoleAdded {
        member: UserRef,
        role_id: u64,
    },
    RoleRemoved {
        member: UserRef,
        role_id: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    MessageDelete,
    MessageEdit,
    VoiceJoin,
    VoiceLeave,
    VoiceSwitch,
    RoleAdded,
    RoleRemoved,
}

impl LogEvent {
    pub fn kind(&self) -> LogKind {
        match self {
            LogEvent::MessageDeleted { .. } => LogKind::MessageDelete,
            LogEvent::MessageEdited { .. } => LogKind::MessageEdit,
            LogEvent::VoiceJoined { .. } => LogKind::VoiceJoin,
            LogEvent::VoiceLeft { .. } => LogKind::VoiceLeave,
            LogEvent::VoiceSwitched { .. } => LogKind::VoiceSwitch,
            LogEvent::RoleAdded { .. } => LogKind::RoleAdded,
            LogEvent::RoleRemoved { .. } => LogKind::RoleRemoved,
        }
    }

    /// The user the entry is about.
    pub fn actor(&self) -> &UserRef {
        match self {
            LogEvent::MessageDeleted { author, .. } | LogEvent::MessageEdited { author, .. } => {
                author
            }
            LogEvent::VoiceJoined { member, .. }
            | LogEvent::VoiceLeft { member, .. }
            | LogEvent::VoiceSwitched { member, .. }
            | LogEvent::RoleAdded { member, .. }
            | LogEvent::RoleRemoved { member, .. } => member,
        }
    }
}

/// A log event stamped with the time it was logged.
///
/// Delete events carry no reliable original timestamp, so every entry uses
/// the logging time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub event: LogEvent,
    pub logged_at: DateTime<Utc>,
}

/// Side effects the router asks the Discord layer to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    SendLog { channel_id: u64, entry: LogEntry },
    /// Auto-roles for a new member, granted in order and independently.
    GrantRoles { user_id: u64, role_ids: Vec<u64> },
}

/// Why an event produced no log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BotAuthor,
    ContentUnchanged,
    RolesUnchanged,
    /// Same channel before and after: mute, deafen, stream toggles.
    NoVoiceChannelChange,
    NoLogChannelConfigured,
    LogChannelUnresolvable,
    /// Deleted message was in neither our snapshot cache nor Serenity's.
    MessageNotCached,
    /// Member update arrived without a cached "before" state.
    MemberNotCached,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::BotAuthor => write!(f, "Ignoring bot"),
            SkipReason::ContentUnchanged => write!(f, "Content unchanged (might be embed update)"),
            SkipReason::RolesUnchanged => {
                write!(f, "Roles unchanged (might be nickname/avatar update)")
            }
            SkipReason::NoVoiceChannelChange => {
                write!(f, "Other voice state change (mute/deafen/etc), not logging")
            }
            SkipReason::NoLogChannelConfigured => write!(f, "No log channel set"),
            SkipReason::LogChannelUnresolvable => write!(f, "Could not find log channel"),
            SkipReason::MessageNotCached => write!(f, "Message not cached"),
            SkipReason::MemberNotCached => write!(f, "Previous member state not cached"),
        }
    }
}

/// How a member moved between voice channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    Joined(u64),
    Left(u64),
    Switched { from: u64, to: u64 },
    NoChange,
}

impl VoiceTransition {
    pub fn classify(before: Option<u64>, after: Option<u64>) -> Self {
        match (before, after) {
            (None, Some(to)) => VoiceTransition::Joined(to),
            (Some(from), None) => VoiceTransition::Left(from),
            (Some(from), Some(to)) if from != to => VoiceTransition::Switched { from, to },
            _ => VoiceTransition::NoChange,
        }
    }
}
