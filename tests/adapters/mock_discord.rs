use autoreact::adapters::DiscordService;
use serenity::async_trait;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

pub struct MockDiscordService {
    reactions: Arc<Mutex<Vec<RecordedReaction>>>,
    replies: Arc<Mutex<Vec<String>>>,
    fail_reactions: AtomicBool,
}

#[derive(Debug, Clone)]
pub struct RecordedReaction {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub emoji: String,
    pub at: Instant,
}

impl Default for MockDiscordService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDiscordService {
    pub fn new() -> Self {
        Self {
            reactions: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(Vec::new())),
            fail_reactions: AtomicBool::new(false),
        }
    }

    /// Make subsequent add_reaction calls fail
    pub fn set_fail_reactions(&self, fail: bool) {
        self.fail_reactions.store(fail, Ordering::SeqCst);
    }

    /// All add_reaction attempts, including failed ones
    pub fn recorded_reactions(&self) -> Vec<RecordedReaction> {
        self.reactions.lock().unwrap().clone()
    }

    pub fn recorded_replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordService for MockDiscordService {
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), serenity::Error> {
        self.reactions.lock().unwrap().push(RecordedReaction {
            channel_id,
            message_id,
            emoji: emoji.to_string(),
            at: Instant::now(),
        });

        if self.fail_reactions.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("mock reaction failure"));
        }
        Ok(())
    }

    async fn send_reply(
        &self,
        _channel_id: ChannelId,
        _message_id: MessageId,
        content: &str,
    ) -> Result<(), serenity::Error> {
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
