// Role logic: the timezone role menu and join-time auto roles.
// No serenity types in here; role changes go through the `RoleEditor` port.

pub mod auto_roles;
pub mod role_editor;
pub mod role_map;
pub mod role_selector;

pub use auto_roles::grant_auto_roles;
pub use role_editor::RoleEditor;
pub use role_map::{ROLE_MENU_ID, ROLE_MENU_PLACEHOLDER, TIMEZONE_ROLES};
pub use role_selector::{apply_role_change, failure_message, resolve};
