use crate::adapters::DiscordService;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error};

/// Rate-limited reaction dispatcher
///
/// Enforces a global minimum spacing between outbound reaction requests: one
/// shared cursor across all channels and messages, not a token bucket. The
/// cursor is guarded by a mutex held across the delay and the request, so
/// concurrent bursts serialize instead of racing the check-then-act.
pub struct ReactionDispatcher<D: DiscordService> {
    service: Arc<D>,
    min_delay: Duration,
    last_dispatch: Mutex<Option<Instant>>,
}

impl<D: DiscordService> ReactionDispatcher<D> {
    pub fn new(service: Arc<D>, min_delay: Duration) -> Self {
        Self {
            service,
            min_delay,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Add a reaction, waiting out the remainder of the minimum delay first
    ///
    /// Fire-and-forget: a failed request is logged and dropped without retry,
    /// and does not advance the rate-limit cursor. Errors never reach the
    /// caller.
    pub async fn dispatch(&self, channel_id: ChannelId, message_id: MessageId, emoji: &str) {
        let mut last_dispatch = self.last_dispatch.lock().await;

        if let Some(previous) = *last_dispatch {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }

        match self.service.add_reaction(channel_id, message_id, emoji).await {
            Ok(()) => {
                *last_dispatch = Some(Instant::now());
                debug!(%channel_id, %message_id, emoji, "Added reaction");
            }
            Err(err) => {
                error!(?err, %channel_id, %message_id, emoji, "Failed to add reaction");
            }
        }
    }
}
