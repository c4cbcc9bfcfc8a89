use autoreact::reactor::{MessageEventKind, ReactableMessage};
use serenity::model::id::{ChannelId, MessageId, UserId};

/// Builder-style message event for driving the reactor in tests
pub struct TestMessage {
    kind: MessageEventKind,
    channel_id: ChannelId,
    message_id: MessageId,
    author_id: Option<UserId>,
    optimistic: bool,
}

impl TestMessage {
    pub fn new(channel_id: u64, message_id: u64, author_id: u64) -> Self {
        Self {
            kind: MessageEventKind::Created,
            channel_id: ChannelId::new(channel_id),
            message_id: MessageId::new(message_id),
            author_id: Some(UserId::new(author_id)),
            optimistic: false,
        }
    }

    pub fn authorless(mut self) -> Self {
        self.author_id = None;
        self
    }

    pub fn optimistic(mut self) -> Self {
        self.optimistic = true;
        self
    }
}

impl ReactableMessage for TestMessage {
    fn kind(&self) -> MessageEventKind {
        self.kind
    }

    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    fn message_id(&self) -> MessageId {
        self.message_id
    }

    fn author_id(&self) -> Option<UserId> {
        self.author_id
    }

    fn is_optimistic(&self) -> bool {
        self.optimistic
    }
}
