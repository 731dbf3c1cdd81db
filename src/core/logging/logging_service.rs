use super::logging_models::{
    GuildEvent, LogEntry, LogEvent, RouteAction, SkipReason, TrackedMessage, UserRef,
    VoiceTransition,
};
use crate::core::config::BotConfig;
use crate::core::guild::GuildSnapshot;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::HashSet;

// Cap how many messages we keep in memory for logging so we don't grow unbounded.
const MAX_TRACKED_MESSAGES: usize = 5_000;

pub struct LoggingService {
    // Message ID -> Snapshot for logging edits/deletes even if Serenity's cache evicts them
    message_cache: DashMap<u64, TrackedMessage>,
}

impl LoggingService {
    pub fn new() -> Self {
        Self {
            message_cache: DashMap::new(),
        }
    }

    /// Store a message snapshot so we can later log deletes/edits reliably.
    pub fn remember_message(&self, message: TrackedMessage) {
        self.message_cache.insert(message.message_id, message);

        // Simple eviction: drop an arbitrary entry once we cross the cap.
        // The iterator holds a shard read guard, so it must be dropped before removing.
        if self.message_cache.len() > MAX_TRACKED_MESSAGES {
            let first_key = self.message_cache.iter().next().map(|entry| *entry.key());
            if let Some(first_key) = first_key {
                self.message_cache.remove(&first_key);
            }
        }
    }

    /// Get a tracked message without removing it (used for edits).
    pub fn get_tracked_message(&self, message_id: u64) -> Option<TrackedMessage> {
        self.message_cache.get(&message_id).map(|m| m.clone())
    }

    /// Remove a tracked message (used for deletions).
    pub fn take_tracked_message(&self, message_id: u64) -> Option<TrackedMessage> {
        self.message_cache.remove(&message_id).map(|(_, msg)| msg)
    }

    /// Route an event using the current time as the log timestamp.
    pub fn route(
        &self,
        event: &GuildEvent,
        config: &BotConfig,
        guild: &GuildSnapshot,
    ) -> Result<Vec<RouteAction>, SkipReason> {
        route_event(event, config, guild, Utc::now())
    }
}

impl Default for LoggingService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ROUTING
// ============================================================================
// One function per event kind. Each is a pure function of the event, the config
// snapshot and the guild snapshot, so none of this needs a live connection.

pub fn route_event(
    event: &GuildEvent,
    config: &BotConfig,
    guild: &GuildSnapshot,
    now: DateTime<Utc>,
) -> Result<Vec<RouteAction>, SkipReason> {
    match event {
        GuildEvent::MemberJoined { member } => Ok(route_member_join(member, config, guild)),
        GuildEvent::MessageDeleted { message } => route_message_delete(message, config, guild, now),
        GuildEvent::MessageEdited {
            guild_id,
            channel_id,
            message_id,
            author,
            before,
            after,
        } => {
            ensure_not_bot(author)?;
            ensure_content_changed(before, after)?;
            let log_channel_id = resolve_log_channel(config, guild)?;

            let event = LogEvent::MessageEdited {
                author: author.clone(),
                channel_id: *channel_id,
                before: before.clone(),
                after: after.clone(),
                jump_url: jump_url(*guild_id, *channel_id, *message_id),
            };
            Ok(vec![send_log(log_channel_id, event, now)])
        }
        GuildEvent::VoiceStateChanged {
            member,
            before_channel_id,
            after_channel_id,
        } => route_voice_state(member, *before_channel_id, *after_channel_id, config, guild, now),
        GuildEvent::MemberRolesChanged {
            member,
            before_role_ids,
            after_role_ids,
        } => route_role_change(member, before_role_ids, after_role_ids, config, guild, now),
    }
}

/// Auto-roles that still exist in the guild, in configured order.
/// Joins are never logged and never skipped, so this can't fail.
fn route_member_join(
    member: &UserRef,
    config: &BotConfig,
    guild: &GuildSnapshot,
) -> Vec<RouteAction> {
    let role_ids: Vec<u64> = config
        .auto_role_ids
        .iter()
        .copied()
        .filter(|role_id| guild.has_role(*role_id))
        .collect();

    if role_ids.is_empty() {
        return Vec::new();
    }
    vec![RouteAction::GrantRoles {
        user_id: member.id,
        role_ids,
    }]
}

fn route_message_delete(
    message: &TrackedMessage,
    config: &BotConfig,
    guild: &GuildSnapshot,
    now: DateTime<Utc>,
) -> Result<Vec<RouteAction>, SkipReason> {
    ensure_not_bot(&message.author)?;
    let log_channel_id = resolve_log_channel(config, guild)?;

    let event = LogEvent::MessageDeleted {
        author: message.author.clone(),
        channel_id: message.channel_id,
        content: message.content.clone(),
    };
    Ok(vec![send_log(log_channel_id, event, now)])
}

fn route_voice_state(
    member: &UserRef,
    before: Option<u64>,
    after: Option<u64>,
    config: &BotConfig,
    guild: &GuildSnapshot,
    now: DateTime<Utc>,
) -> Result<Vec<RouteAction>, SkipReason> {
    ensure_not_bot(member)?;
    let log_channel_id = resolve_log_channel(config, guild)?;

    let member = member.clone();
    let event = match VoiceTransition::classify(before, after) {
        VoiceTransition::Joined(channel_id) => LogEvent::VoiceJoined { member, channel_id },
        VoiceTransition::Left(channel_id) => LogEvent::VoiceLeft { member, channel_id },
        VoiceTransition::Switched { from, to } => LogEvent::VoiceSwitched {
            member,
            from_channel_id: from,
            to_channel_id: to,
        },
        VoiceTransition::NoChange => return Err(SkipReason::NoVoiceChannelChange),
    };
    Ok(vec![send_log(log_channel_id, event, now)])
}

/// One entry per added role, then one per removed role. Never batched.
fn route_role_change(
    member: &UserRef,
    before: &[u64],
    after: &[u64],
    config: &BotConfig,
    guild: &GuildSnapshot,
    now: DateTime<Utc>,
) -> Result<Vec<RouteAction>, SkipReason> {
    ensure_not_bot(member)?;
    let (added, removed) = diff_roles(before, after);
    if added.is_empty() && removed.is_empty() {
        return Err(SkipReason::RolesUnchanged);
    }
    let log_channel_id = resolve_log_channel(config, guild)?;

    let added = added.into_iter().map(|role_id| LogEvent::RoleAdded {
        member: member.clone(),
        role_id,
    });
    let removed = removed.into_iter().map(|role_id| LogEvent::RoleRemoved {
        member: member.clone(),
        role_id,
    });

    Ok(added
        .chain(removed)
        .map(|event| send_log(log_channel_id, event, now))
        .collect())
}

fn send_log(channel_id: u64, event: LogEvent, now: DateTime<Utc>) -> RouteAction {
    RouteAction::SendLog {
        channel_id,
        entry: LogEntry {
            event,
            logged_at: now,
        },
    }
}

// ============================================================================
// SKIP PREDICATES
// ============================================================================

pub fn ensure_not_bot(user: &UserRef) -> Result<(), SkipReason> {
    if user.bot {
        Err(SkipReason::BotAuthor)
    } else {
        Ok(())
    }
}

pub fn ensure_content_changed(before: &str, after: &str) -> Result<(), SkipReason> {
    if before == after {
        Err(SkipReason::ContentUnchanged)
    } else {
        Ok(())
    }
}

/// The configured log channel, if one is set and still exists in the guild.
pub fn resolve_log_channel(config: &BotConfig, guild: &GuildSnapshot) -> Result<u64, SkipReason> {
    let channel_id = config
        .log_channel_id
        .ok_or(SkipReason::NoLogChannelConfigured)?;

    if guild.has_channel(channel_id) {
        Ok(channel_id)
    } else {
        Err(SkipReason::LogChannelUnresolvable)
    }
}

/// Set difference by role id, each side in the order the roles were listed.
pub fn diff_roles(before: &[u64], after: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let before_set: HashSet<u64> = before.iter().copied().collect();
    let after_set: HashSet<u64> = after.iter().copied().collect();

    let added = after
        .iter()
        .copied()
        .filter(|id| !before_set.contains(id))
        .collect();
    let removed = before
        .iter()
        .copied()
        .filter(|id| !after_set.contains(id))
        .collect();

    (added, removed)
}

pub fn jump_url(guild_id: u64, channel_id: u64, message_id: u64) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id, channel_id, message_id
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logging::LogKind;

    const GUILD: u64 = 1;
    const LOG_CHANNEL: u64 = 999;
    const GENERAL: u64 = 500;
    const VOICE_A: u64 = 700;
    const VOICE_B: u64 = 701;

    fn user(bot: bool) -> UserRef {
        UserRef {
            id: 42,
            name: "ferris".to_string(),
            avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
            bot,
        }
    }

    fn config(log_channel_id: Option<u64>) -> BotConfig {
        BotConfig {
            log_channel_id,
            auto_role_ids: vec![10, 20],
        }
    }

    fn guild() -> GuildSnapshot {
        GuildSnapshot::new([LOG_CHANNEL, GENERAL, VOICE_A, VOICE_B], [10, 20, 30])
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn deleted(author: UserRef, content: &str) -> GuildEvent {
        GuildEvent::MessageDeleted {
            message: TrackedMessage {
                message_id: 3,
                guild_id: GUILD,
                channel_id: GENERAL,
                author,
                content: content.to_string(),
            },
        }
    }

    fn edited(author: UserRef, before: &str, after: &str) -> GuildEvent {
        GuildEvent::MessageEdited {
            guild_id: GUILD,
            channel_id: GENERAL,
            message_id: 3,
            author,
            before: before.to_string(),
            after: after.to_string(),
        }
    }

    fn voice(member: UserRef, before: Option<u64>, after: Option<u64>) -> GuildEvent {
        GuildEvent::VoiceStateChanged {
            member,
            before_channel_id: before,
            after_channel_id: after,
        }
    }

    fn roles_changed(member: UserRef, before: &[u64], after: &[u64]) -> GuildEvent {
        GuildEvent::MemberRolesChanged {
            member,
            before_role_ids: before.to_vec(),
            after_role_ids: after.to_vec(),
        }
    }

    fn route(event: &GuildEvent) -> Result<Vec<RouteAction>, SkipReason> {
        route_event(event, &config(Some(LOG_CHANNEL)), &guild(), now())
    }

    fn logged_events(actions: Vec<RouteAction>) -> Vec<(u64, LogEvent)> {
        actions
            .into_iter()
            .map(|action| match action {
                RouteAction::SendLog { channel_id, entry } => (channel_id, entry.event),
                other => panic!("expected a log, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn deleted_message_is_logged_to_configured_channel() {
        let actions = route(&deleted(user(false), "secret plans")).unwrap();
        let logs = logged_events(actions);

        assert_eq!(logs.len(), 1);
        let (channel_id, event) = &logs[0];
        assert_eq!(*channel_id, LOG_CHANNEL);
        assert_eq!(
            *event,
            LogEvent::MessageDeleted {
                author: user(false),
                channel_id: GENERAL,
                content: "secret plans".to_string(),
            }
        );
    }

    #[test]
    fn log_entries_use_logging_time() {
        let actions = route(&deleted(user(false), "hi")).unwrap();
        match &actions[0] {
            RouteAction::SendLog { entry, .. } => assert_eq!(entry.logged_at, now()),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn bot_events_are_never_logged() {
        let events = [
            deleted(user(true), "beep"),
            edited(user(true), "a", "b"),
            voice(user(true), None, Some(VOICE_A)),
            voice(user(true), Some(VOICE_A), Some(VOICE_B)),
            roles_changed(user(true), &[], &[30]),
        ];

        for event in &events {
            assert_eq!(route(event), Err(SkipReason::BotAuthor), "{}", event.name());
        }
    }

    #[test]
    fn edit_without_content_change_is_skipped() {
        for content in ["same", "🦀", "multi\nline"] {
            assert_eq!(
                route(&edited(user(false), content, content)),
                Err(SkipReason::ContentUnchanged)
            );
        }
    }

    #[test]
    fn edit_logs_both_versions_and_jump_link() {
        let logs = logged_events(route(&edited(user(false), "old", "new")).unwrap());

        assert_eq!(
            logs,
            vec![(
                LOG_CHANNEL,
                LogEvent::MessageEdited {
                    author: user(false),
                    channel_id: GENERAL,
                    before: "old".to_string(),
                    after: "new".to_string(),
                    jump_url: "https://discord.com/channels/1/500/3".to_string(),
                }
            )]
        );
    }

    #[test]
    fn missing_log_channel_skips_logging() {
        let event = deleted(user(false), "hello");

        assert_eq!(
            route_event(&event, &config(None), &guild(), now()),
            Err(SkipReason::NoLogChannelConfigured)
        );
        assert_eq!(
            route_event(&event, &config(Some(12345)), &guild(), now()),
            Err(SkipReason::LogChannelUnresolvable)
        );
    }

    #[test]
    fn bot_check_runs_before_channel_check() {
        let event = deleted(user(true), "hello");
        assert_eq!(
            route_event(&event, &config(None), &guild(), now()),
            Err(SkipReason::BotAuthor)
        );
    }

    #[test]
    fn voice_transitions_are_classified() {
        assert_eq!(
            VoiceTransition::classify(None, Some(VOICE_A)),
            VoiceTransition::Joined(VOICE_A)
        );
        assert_eq!(
            VoiceTransition::classify(Some(VOICE_A), None),
            VoiceTransition::Left(VOICE_A)
        );
        assert_eq!(
            VoiceTransition::classify(Some(VOICE_A), Some(VOICE_B)),
            VoiceTransition::Switched {
                from: VOICE_A,
                to: VOICE_B
            }
        );
        assert_eq!(
            VoiceTransition::classify(Some(VOICE_A), Some(VOICE_A)),
            VoiceTransition::NoChange
        );
        assert_eq!(VoiceTransition::classify(None, None), VoiceTransition::NoChange);
    }

    #[test]
    fn voice_events_map_to_log_kinds() {
        let cases = [
            (None, Some(VOICE_A), Ok(LogKind::VoiceJoin)),
            (Some(VOICE_A), None, Ok(LogKind::VoiceLeave)),
            (Some(VOICE_A), Some(VOICE_B), Ok(LogKind::VoiceSwitch)),
            (Some(VOICE_A), Some(VOICE_A), Err(SkipReason::NoVoiceChannelChange)),
            (None, None, Err(SkipReason::NoVoiceChannelChange)),
        ];

        for (before, after, expected) in cases {
            let result = route(&voice(user(false), before, after))
                .map(|actions| logged_events(actions)[0].1.kind());
            assert_eq!(result, expected, "{:?} -> {:?}", before, after);
        }
    }

    #[test]
    fn voice_switch_keeps_both_channels() {
        let logs = logged_events(route(&voice(user(false), Some(VOICE_A), Some(VOICE_B))).unwrap());
        assert_eq!(
            logs[0].1,
            LogEvent::VoiceSwitched {
                member: user(false),
                from_channel_id: VOICE_A,
                to_channel_id: VOICE_B,
            }
        );
    }

    #[test]
    fn role_changes_log_one_entry_per_role() {
        let logs = logged_events(route(&roles_changed(user(false), &[10, 20], &[20, 30, 40])).unwrap());

        let events: Vec<LogEvent> = logs.into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            events,
            vec![
                LogEvent::RoleAdded {
                    member: user(false),
                    role_id: 30
                },
                LogEvent::RoleAdded {
                    member: user(false),
                    role_id: 40
                },
                LogEvent::RoleRemoved {
                    member: user(false),
                    role_id: 10
                },
            ]
        );
    }

    #[test]
    fn reordered_roles_count_as_unchanged() {
        assert_eq!(
            route(&roles_changed(user(false), &[10, 20], &[20, 10])),
            Err(SkipReason::RolesUnchanged)
        );
    }

    #[test]
    fn member_join_grants_auto_roles_in_order() {
        let actions = route(&GuildEvent::MemberJoined { member: user(false) }).unwrap();
        assert_eq!(
            actions,
            vec![RouteAction::GrantRoles {
                user_id: 42,
                role_ids: vec![10, 20],
            }]
        );
    }

    #[test]
    fn member_join_skips_roles_missing_from_guild() {
        let guild = GuildSnapshot::new([LOG_CHANNEL], [20]);
        let actions = route_event(
            &GuildEvent::MemberJoined { member: user(false) },
            &config(None),
            &guild,
            now(),
        )
        .unwrap();

        assert_eq!(
            actions,
            vec![RouteAction::GrantRoles {
                user_id: 42,
                role_ids: vec![20],
            }]
        );
    }

    #[test]
    fn member_join_with_no_live_auto_roles_does_nothing() {
        let guild = GuildSnapshot::new([LOG_CHANNEL], []);
        let actions = route_event(
            &GuildEvent::MemberJoined { member: user(false) },
            &config(Some(LOG_CHANNEL)),
            &guild,
            now(),
        )
        .unwrap();

        assert!(actions.is_empty());
    }

    #[test]
    fn message_cache_round_trip() {
        let service = LoggingService::new();
        let message = TrackedMessage {
            message_id: 77,
            guild_id: GUILD,
            channel_id: GENERAL,
            author: user(false),
            content: "cached".to_string(),
        };

        service.remember_message(message);
        assert_eq!(service.get_tracked_message(77).unwrap().content, "cached");
        assert!(service.take_tracked_message(77).is_some());
        assert!(service.take_tracked_message(77).is_none());
    }

    #[test]
    fn message_cache_is_bounded() {
        let service = LoggingService::new();
        for id in 0..(MAX_TRACKED_MESSAGES as u64 + 10) {
            service.remember_message(TrackedMessage {
                message_id: id,
                guild_id: GUILD,
                channel_id: GENERAL,
                author: user(false),
                content: String::new(),
            });
        }
        assert_eq!(service.message_cache.len(), MAX_TRACKED_MESSAGES);
    }

    #[test]
    fn eviction_returns_once_cache_is_full() {
        let service = std::sync::Arc::new(LoggingService::new());
        let worker = std::sync::Arc::clone(&service);
        let (done_tx, done_rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            for id in 0..=(MAX_TRACKED_MESSAGES as u64) {
                worker.remember_message(tracked(id, ""));
            }
            let _ = done_tx.send(());
        });

        assert!(
            done_rx
                .recv_timeout(std::time::Duration::from_secs(5))
                .is_ok(),
            "remember_message stalled while evicting"
        );
        assert_eq!(service.message_cache.len(), MAX_TRACKED_MESSAGES);
    }

    #[test]
    fn edited_snapshot_replaces_previous_content() {
        let service = LoggingService::new();
        service.remember_message(tracked(42, "first draft"));

        // An edit re-remembers the message with its new content.
        let previous = service.get_tracked_message(42).unwrap();
        assert_eq!(previous.content, "first draft");
        service.remember_message(TrackedMessage {
            content: "second draft".to_string(),
            ..previous
        });

        let second = service.get_tracked_message(42).unwrap();
        assert_eq!(second.content, "second draft");
        service.remember_message(TrackedMessage {
            content: "final text".to_string(),
            ..second
        });

        let deleted = service.take_tracked_message(42).unwrap();
        assert_eq!(deleted.content, "final text");
        assert!(service.get_tracked_message(42).is_none());
    }

    fn tracked(message_id: u64, content: &str) -> TrackedMessage {
        TrackedMessage {
            message_id,
            guild_id: GUILD,
            channel_id: GENERAL,
            author: user(false),
            content: content.to_string(),
        }
    }
}
