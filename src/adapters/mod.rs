// Trait definitions
pub mod discord_service;
pub mod settings_store;

// Implementations
pub mod json_settings_store;
pub mod serenity_discord_service;

// Re-exports for convenience
pub use discord_service::DiscordService;
pub use json_settings_store::JsonFileSettingsStore;
pub use serenity_discord_service::SerenityDiscordService;
pub use settings_store::SettingsStore;
