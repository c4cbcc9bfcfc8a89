use super::discord_service::DiscordService;
use serenity::async_trait;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, EmojiId, MessageId};
use std::sync::Arc;

/// Implementation for Discord operations via Serenity
pub struct SerenityDiscordService {
    http: Arc<serenity::http::Http>,
}

impl SerenityDiscordService {
    /// Create a new SerenityDiscordService
    ///
    /// # Arguments
    ///
    /// * `http` - The serenity HTTP client
    pub fn new(http: Arc<serenity::http::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordService for SerenityDiscordService {
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), serenity::Error> {
        let reaction = parse_reaction(emoji);
        self.http
            .create_reaction(channel_id, message_id, &reaction)
            .await
    }

    async fn send_reply(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), serenity::Error> {
        use serenity::builder::CreateMessage;

        let builder = CreateMessage::new()
            .content(content)
            .reference_message((channel_id, message_id));

        channel_id.send_message(&self.http, builder).await?;
        Ok(())
    }
}

/// Parse a configured emoji string into a serenity ReactionType
///
/// # Emoji Format
///
/// - Unicode emoji: "👍", "🎉", etc.
/// - Custom emoji: "name:id" format (e.g. "customemoji:123456789"),
///   also accepted in the chat form `<:name:id>` / `<a:name:id>`
///
/// Anything that does not parse as a custom emoji is treated as unicode;
/// serenity percent-encodes the emoji on the wire either way.
fn parse_reaction(emoji: &str) -> ReactionType {
    let trimmed = emoji.trim();

    let inner = trimmed
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(trimmed);
    let (animated, inner) = match inner.strip_prefix("a:") {
        Some(rest) => (true, rest),
        None => (false, inner.strip_prefix(':').unwrap_or(inner)),
    };

    if let Some((name, id)) = inner.rsplit_once(':') {
        if let Ok(id) = id.parse::<u64>() {
            if id != 0 && !name.is_empty() {
                return ReactionType::Custom {
                    animated,
                    id: EmojiId::new(id),
                    name: Some(name.to_string()),
                };
            }
        }
    }

    ReactionType::Unicode(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("🔥")]
    #[case::multi_codepoint("👍🏽")]
    #[case::trimmed(" 🎉 ")]
    fn test_parse_unicode_reaction(#[case] input: &str) {
        match parse_reaction(input) {
            ReactionType::Unicode(s) => assert_eq!(s, input.trim()),
            other => panic!("Expected unicode reaction, got {:?}", other),
        }
    }

    #[rstest]
    #[case::bare("blob:123456789", false, "blob", 123456789)]
    #[case::chat_form("<:blob:123456789>", false, "blob", 123456789)]
    #[case::animated("<a:party:42>", true, "party", 42)]
    fn test_parse_custom_reaction(
        #[case] input: &str,
        #[case] expect_animated: bool,
        #[case] expect_name: &str,
        #[case] expect_id: u64,
    ) {
        match parse_reaction(input) {
            ReactionType::Custom { animated, id, name } => {
                assert_eq!(animated, expect_animated);
                assert_eq!(id, EmojiId::new(expect_id));
                assert_eq!(name.as_deref(), Some(expect_name));
            }
            other => panic!("Expected custom reaction, got {:?}", other),
        }
    }

    #[rstest]
    #[case::zero_id("blob:0")]
    #[case::missing_name(":123")]
    #[case::non_numeric_id("blob:abc")]
    fn test_invalid_custom_falls_back_to_unicode(#[case] input: &str) {
        assert!(matches!(parse_reaction(input), ReactionType::Unicode(_)));
    }
}
