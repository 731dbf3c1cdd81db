// Process-level settings read from the environment (and `.env` via dotenv).
// These are fixed for the lifetime of the process, unlike `BotConfig`.

const DEFAULT_HEALTH_PORT: u16 = 10000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.")]
    MissingToken,
    #[error("PORT must be a number between 0 and 65535, got `{0}`")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub discord_token: String,
    /// Port for the `/` and `/health` liveness endpoint.
    pub health_port: u16,
}

impl AppSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup so tests don't have to touch the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(SettingsError::MissingToken)?;

        let health_port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidPort(raw))?,
            None => DEFAULT_HEALTH_PORT,
        };

        Ok(Self {
            discord_token,
            health_port,
        })
    }
}
