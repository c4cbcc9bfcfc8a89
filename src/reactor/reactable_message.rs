use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, MessageId, UserId};

/// Kind of inbound message event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEventKind {
    /// A newly created message
    Created,
    /// Anything else delivered on the same event channel
    Other,
}

/// Trait for message events considered for auto-reaction
///
/// This trait abstracts the properties of a message-creation event needed by
/// the filter chain, allowing the logic to be tested without depending on
/// serenity's Message type.
pub trait ReactableMessage {
    fn kind(&self) -> MessageEventKind;
    fn channel_id(&self) -> ChannelId;
    fn message_id(&self) -> MessageId;
    /// Author of the message, `None` for authorless messages
    fn author_id(&self) -> Option<UserId>;
    /// Whether this is a locally generated echo not yet confirmed by the server
    fn is_optimistic(&self) -> bool;
}

impl ReactableMessage for Message {
    fn kind(&self) -> MessageEventKind {
        // The gateway adapter only feeds message-creation events through here
        MessageEventKind::Created
    }

    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    fn message_id(&self) -> MessageId {
        self.id
    }

    fn author_id(&self) -> Option<UserId> {
        Some(self.author.id)
    }

    fn is_optimistic(&self) -> bool {
        // Gateway messages are server-confirmed by definition
        false
    }
}
