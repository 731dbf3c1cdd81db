// Timezone role selection.
//
// Every menu interaction strips ALL timezone roles the member holds and then adds
// the one they picked (if any). Re-picking the role you already have therefore
// removes and re-adds it; that keeps the rule simple and the group exclusive.

use super::role_editor::RoleEditor;
use super::role_map::{is_timezone_role, role_for_key};
use crate::core::guild::GuildSnapshot;
use anyhow::Result;
use std::collections::{BTreeSet, HashSet};

/// The role mutations needed to realize one menu selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleChange {
    pub to_remove: BTreeSet<u64>,
    pub to_add: BTreeSet<u64>,
}

/// Which confirmation the member gets after a successful change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A timezone role was granted.
    Updated,
    /// Nothing was granted, the member's timezone roles were only cleared.
    Cleared,
}

impl SelectionOutcome {
    pub fn confirmation(&self) -> &'static str {
        match self {
            SelectionOutcome::Updated => "✅ Your roles have been updated!",
            SelectionOutcome::Cleared => "✅ Your timezone roles have been removed!",
        }
    }
}

impl RoleChange {
    pub fn outcome(&self) -> SelectionOutcome {
        if self.to_add.is_empty() {
            SelectionOutcome::Cleared
        } else {
            SelectionOutcome::Updated
        }
    }
}

/// Work out which roles to remove and add for a menu selection.
///
/// `to_remove` is always every timezone role the member currently holds, no matter
/// what was requested. `to_add` holds the requested role only if the key is known
/// and the role still exists in the guild.
pub fn resolve(
    current_role_ids: &HashSet<u64>,
    requested_key: Option<&str>,
    guild: &GuildSnapshot,
) -> RoleChange {
    let to_remove = current_role_ids
        .iter()
        .copied()
        .filter(|id| is_timezone_role(*id))
        .collect();

    let to_add = requested_key
        .and_then(role_for_key)
        .map(|role| role.role_id)
        .filter(|id| guild.has_role(*id))
        .into_iter()
        .collect();

    RoleChange { to_remove, to_add }
}

/// Apply a [`RoleChange`]: removals first, then additions.
///
/// Stops at the first failing call and returns its error. Nothing is rolled back,
/// so the member keeps whatever state the successful calls produced.
pub async fn apply_role_change<E: RoleEditor + ?Sized>(
    editor: &E,
    user_id: u64,
    change: &RoleChange,
) -> Result<SelectionOutcome> {
    for role_id in &change.to_remove {
        editor.remove_role(user_id, *role_id).await?;
    }
    for role_id in &change.to_add {
        editor.add_role(user_id, *role_id).await?;
    }
    Ok(change.outcome())
}

/// Ephemeral message shown when applying a selection fails.
pub fn failure_message(cause: &impl std::fmt::Display) -> String {
    format!(
        "❌ Failed to update roles. Make sure the bot has permission and its role is above the roles being assigned.\nError: {}",
        cause
    )
}
