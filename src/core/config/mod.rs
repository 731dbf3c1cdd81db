pub mod config_models;
pub mod config_service;
pub mod config_store;
pub mod settings;

pub use config_models::BotConfig;
pub use config_service::ConfigService;
pub use config_store::ConfigStore;
pub use settings::AppSettings;
