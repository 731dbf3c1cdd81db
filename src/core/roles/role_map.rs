/// Custom id shared by every posted copy of the role menu.
///
/// Interactions are routed on this id alone, so menus posted before a restart
/// keep working afterwards.
pub const ROLE_MENU_ID: &str = "timezone_select";

pub const ROLE_MENU_PLACEHOLDER: &str = "Choose your timezone";

/// One option of the timezone menu and the role it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneRole {
    pub key: &'static str,
    pub role_id: u64,
    pub label: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

/// The timezone role group. A member holds at most one of these roles.
pub const TIMEZONE_ROLES: [TimezoneRole; 9] = [
    TimezoneRole {
        key: "role_gmt8",
        role_id: 1446396768223887361,
        label: "GMT-8 (PST)",
        description: "Pacific Standard Time",
        emoji: "🌊",
    },
    TimezoneRole {
        key: "role_gmt5",
        role_id: 1446396812264210483,
        label: "GMT-5 (EST)",
        description: "Eastern Standard Time",
        emoji: "🌆",
    },
    TimezoneRole {
        key: "role_gmt0",
        role_id: 1446396816626024478,
        label: "GMT±0 (GMT)",
        description: "Greenwich Mean Time",
        emoji: "🌧️",
    },
    TimezoneRole {
        key: "role_gmt1",
        role_id: 1446396816797990943,
        label: "GMT+1 (CET)",
        description: "Central European Time",
        emoji: "🏰",
    },
    TimezoneRole {
        key: "role_gmt2",
        role_id: 1446396817372872764,
        label: "GMT+2 (EET)",
        description: "Eastern European Time",
        emoji: "🌲",
    },
    TimezoneRole {
        key: "role_gmt3",
        role_id: 1446396818127585381,
        label: "GMT+3 (ARAT)",
        description: "Arabia Standard Time",
        emoji: "🏜️",
    },
    TimezoneRole {
        key: "role_gmt8_cst",
        role_id: 1446396818589094009,
        label: "GMT+8 (CST)",
        description: "China Standard Time",
        emoji: "🏯",
    },
    TimezoneRole {
        key: "role_gmt9",
        role_id: 1446396819134222490,
        label: "GMT+9 (JST)",
        description: "Japan Standard Time",
        emoji: "🎌",
    },
    TimezoneRole {
        key: "role_gmt10",
        role_id: 1446396975367847939,
        label: "GMT+10 (AEST)",
        description: "Australian Eastern Time",
        emoji: "🐨",
    },
];

/// Look up the role behind a menu value.
pub fn role_for_key(key: &str) -> Option<&'static TimezoneRole> {
    TIMEZONE_ROLES.iter().find(|role| role.key == key)
}

pub fn is_timezone_role(role_id: u64) -> bool {
    TIMEZONE_ROLES.iter().any(|role| role.role_id == role_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_and_role_ids_are_unique() {
        let keys: HashSet<_> = TIMEZONE_ROLES.iter().map(|r| r.key).collect();
        let ids: HashSet<_> = TIMEZONE_ROLES.iter().map(|r| r.role_id).collect();
        assert_eq!(keys.len(), TIMEZONE_ROLES.len());
        assert_eq!(ids.len(), TIMEZONE_ROLES.len());
    }

    #[test]
    fn lookup_by_key() {
        let role = role_for_key("role_gmt9").unwrap();
        assert_eq!(role.role_id, 1446396819134222490);
        assert_eq!(role.label, "GMT+9 (JST)");
        assert!(role_for_key("role_gmt42").is_none());
    }

    #[test]
    fn menu_options_fit_discord_limits() {
        // Select menus allow 25 options, labels and descriptions up to 100 chars
        assert!(TIMEZONE_ROLES.len() <= 25);
        for role in TIMEZONE_ROLES.iter() {
            assert!(role.label.chars().count() <= 100);
            assert!(role.description.chars().count() <= 100);
        }
    }
}
