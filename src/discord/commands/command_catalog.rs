// Discord commands module.
// Each feature gets its own command file.

pub mod embed;

pub mod presence;

pub mod reaction_roles;

pub mod settings;
