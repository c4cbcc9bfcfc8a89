use serenity::async_trait;
use serenity::model::id::{ChannelId, MessageId};

/// Interface for Discord operations
#[async_trait]
pub trait DiscordService: Send + Sync {
    /// Add a reaction to a message, authored by the current account
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The channel containing the message
    /// * `message_id` - The message to react to
    /// * `emoji` - Unicode emoji (e.g. "🔥") or custom emoji in `name:id` form
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), serenity::Error>;

    /// Reply to a message in a channel
    ///
    /// Used for command confirmation messages.
    async fn send_reply(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), serenity::Error>;
}
