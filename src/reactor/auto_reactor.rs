use super::commands::Command;
use super::dispatcher::ReactionDispatcher;
use super::filter;
use super::reactable_message::ReactableMessage;
use super::settings;
use super::state::ReactorState;
use crate::adapters::{DiscordService, SettingsStore};
use serenity::model::id::{ChannelId, UserId};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{error, info};

/// The auto-react module instance
///
/// Owns the in-memory configuration, keeps it in sync with the settings
/// store after every mutation, and feeds qualifying message events to the
/// rate-limited dispatcher.
pub struct AutoReactor<D: DiscordService, S: SettingsStore> {
    state: RwLock<ReactorState>,
    store: S,
    dispatcher: Arc<ReactionDispatcher<D>>,
    default_emoji: String,
}

impl<D, S> AutoReactor<D, S>
where
    D: DiscordService + 'static,
    S: SettingsStore,
{
    /// Create the module, hydrating state from the settings store
    ///
    /// A store field that is present but malformed aborts hydration with an
    /// error; an absent field hydrates to the empty collection.
    pub fn new(
        store: S,
        dispatcher: Arc<ReactionDispatcher<D>>,
        default_emoji: String,
    ) -> anyhow::Result<Self> {
        let state = settings::load(&store)?;

        info!(
            blacklisted = state.blacklist.len(),
            channels = state.channels.len(),
            "Hydrated auto-react settings"
        );

        Ok(Self {
            state: RwLock::new(state),
            store,
            dispatcher,
            default_emoji,
        })
    }

    /// Handle an inbound message-creation event
    ///
    /// Applies the filter chain and, if the message qualifies, spawns the
    /// dispatch as a detached task. Never awaits the rate-limit delay or the
    /// network call; the spawned task's outcome is handled entirely by the
    /// dispatcher's logging.
    pub fn on_message<M: ReactableMessage>(&self, event: &M) {
        let emoji = {
            let state = self.read_state();
            match filter::reaction_for(&state, event) {
                Some(emoji) => emoji.to_string(),
                None => return,
            }
        };

        let dispatcher = Arc::clone(&self.dispatcher);
        let channel_id = event.channel_id();
        let message_id = event.message_id();

        tokio::spawn(async move {
            dispatcher.dispatch(channel_id, message_id, &emoji).await;
        });
    }

    /// Execute a configuration command for a channel, returning the
    /// confirmation message to show the user
    pub fn handle_command(&self, channel_id: ChannelId, command: Command) -> String {
        match command {
            Command::Toggle => match self.toggle_channel(channel_id) {
                Ok(true) => "Auto-React enabled for this channel".to_string(),
                Ok(false) => "Auto-React disabled for this channel".to_string(),
                Err(err) => persist_failure(err),
            },
            Command::SetEmoji(emoji) => match self.set_channel_emoji(channel_id, &emoji) {
                Ok(()) => format!("Auto-React emoji set to {} for this channel", emoji),
                Err(err) => persist_failure(err),
            },
            Command::Remove => match self.remove_channel(channel_id) {
                Ok(true) => "Auto-React disabled for this channel".to_string(),
                Ok(false) => "Auto-React is not enabled for this channel".to_string(),
                Err(err) => persist_failure(err),
            },
            Command::Blacklist(user_id) => match self.toggle_blacklist(user_id) {
                Ok(true) => "User added to Auto-React blacklist".to_string(),
                Ok(false) => "User removed from Auto-React blacklist".to_string(),
                Err(err) => persist_failure(err),
            },
            Command::Status => self.status_summary(),
        }
    }

    /// Toggle auto-react for a channel, enabling it with the default emoji
    pub fn toggle_channel(&self, channel_id: ChannelId) -> anyhow::Result<bool> {
        let mut state = self.write_state();
        let enabled = state.toggle_channel(channel_id, &self.default_emoji);
        self.persist_channels(&state)?;
        Ok(enabled)
    }

    /// Set or update a channel's reaction emoji
    pub fn set_channel_emoji(&self, channel_id: ChannelId, emoji: &str) -> anyhow::Result<()> {
        let mut state = self.write_state();
        state.set_emoji(channel_id, emoji.to_string());
        self.persist_channels(&state)
    }

    /// Remove a channel's configuration, returns whether it was configured
    pub fn remove_channel(&self, channel_id: ChannelId) -> anyhow::Result<bool> {
        let mut state = self.write_state();
        let removed = state.remove_channel(channel_id);
        if removed {
            self.persist_channels(&state)?;
        }
        Ok(removed)
    }

    /// Toggle a user's blacklist membership, returns whether they are now
    /// blacklisted
    pub fn toggle_blacklist(&self, user_id: UserId) -> anyhow::Result<bool> {
        let mut state = self.write_state();
        let blacklisted = state.toggle_blacklist(user_id);
        let encoded = settings::encode_blacklist(&state.blacklist)?;
        self.store.write(settings::BLACKLIST_KEY, &encoded)?;
        Ok(blacklisted)
    }

    pub fn is_blacklisted(&self, user_id: UserId) -> bool {
        self.read_state().is_blacklisted(user_id)
    }

    pub fn channel_emoji(&self, channel_id: ChannelId) -> Option<String> {
        self.read_state().emoji_for(channel_id).map(str::to_string)
    }

    /// Summary of the blacklist and the configured channels
    pub fn status_summary(&self) -> String {
        let state = self.read_state();
        let mut summary = format!(
            "{}\n{}",
            state.blacklist_summary(),
            state.channel_summary()
        );
        for (channel_id, emoji) in state.channel_entries() {
            summary.push_str(&format!("\n<#{}>: {}", channel_id.get(), emoji));
        }
        summary
    }

    /// Full-snapshot write of the channel map to the store
    fn persist_channels(&self, state: &ReactorState) -> anyhow::Result<()> {
        let encoded = settings::encode_channels(&state.channels)?;
        self.store.write(settings::CHANNELS_KEY, &encoded)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ReactorState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ReactorState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn persist_failure(err: anyhow::Error) -> String {
    error!(?err, "Failed to persist auto-react settings");
    "Failed to update Auto-React settings".to_string()
}
