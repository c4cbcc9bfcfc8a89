mod mock_discord;
mod mock_settings_store;
mod test_message;

pub use mock_discord::{MockDiscordService, RecordedReaction};
pub use mock_settings_store::MockSettingsStore;
pub use test_message::TestMessage;
