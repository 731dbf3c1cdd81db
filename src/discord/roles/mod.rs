// Discord side of role handling: the select menu and the HTTP role editor.

pub mod role_editor;
pub mod role_menu;
