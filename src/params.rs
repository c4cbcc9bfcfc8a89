use anyhow::Context as _;
use serde::Deserialize;

/// Default path of the JSON settings store
fn default_settings_path() -> String {
    "autoreact-settings.json".to_string()
}

/// Default prefix for configuration commands
fn default_command_prefix() -> String {
    "!autoreact".to_string()
}

/// Default emoji applied when a channel is toggled on
fn default_emoji() -> String {
    "💀".to_string()
}

/// Default minimum spacing between outbound reaction requests (milliseconds)
fn default_min_reaction_delay_ms() -> u64 {
    50
}

#[derive(Deserialize, Clone)]
pub struct Params {
    pub discord_token: String,

    #[serde(default = "default_settings_path")]
    pub settings_path: String,

    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    #[serde(default = "default_emoji")]
    pub default_emoji: String,

    #[serde(default = "default_min_reaction_delay_ms")]
    pub min_reaction_delay_ms: u64,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    if s.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        if s.is_empty() {
            return "<empty>".to_string();
        }
        return format!("{}***", &s[..1]);
    }

    format!(
        "{}***{}",
        &s[..VISIBLE_CHARS],
        &s[s.len() - VISIBLE_CHARS..]
    )
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_token", &mask_token(&self.discord_token))
            .field("settings_path", &self.settings_path)
            .field("command_prefix", &self.command_prefix)
            .field("default_emoji", &self.default_emoji)
            .field("min_reaction_delay_ms", &self.min_reaction_delay_ms)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }
}
