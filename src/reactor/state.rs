use serenity::model::id::{ChannelId, UserId};
use std::collections::{HashMap, HashSet};

/// In-memory auto-react configuration
///
/// Holds the per-user blacklist and the channel → emoji mapping. Mutations
/// return whether the entry is now present so callers can phrase
/// confirmation messages; persistence is the owner's responsibility.
#[derive(Debug, Default)]
pub struct ReactorState {
    pub(crate) blacklist: HashSet<UserId>,
    pub(crate) channels: HashMap<ChannelId, String>,
}

impl ReactorState {
    /// Toggle auto-react for a channel, enabling it with the given emoji
    ///
    /// Returns `true` if the channel is now enabled.
    pub fn toggle_channel(&mut self, channel_id: ChannelId, default_emoji: &str) -> bool {
        if self.channels.remove(&channel_id).is_some() {
            false
        } else {
            self.channels.insert(channel_id, default_emoji.to_string());
            true
        }
    }

    /// Set or update the reaction emoji for a channel
    pub fn set_emoji(&mut self, channel_id: ChannelId, emoji: String) {
        self.channels.insert(channel_id, emoji);
    }

    /// Remove a channel's configuration, returns `true` if it was configured
    pub fn remove_channel(&mut self, channel_id: ChannelId) -> bool {
        self.channels.remove(&channel_id).is_some()
    }

    pub fn emoji_for(&self, channel_id: ChannelId) -> Option<&str> {
        self.channels.get(&channel_id).map(String::as_str)
    }

    /// Toggle blacklist membership, returns `true` if the user is now blacklisted
    pub fn toggle_blacklist(&mut self, user_id: UserId) -> bool {
        if self.blacklist.remove(&user_id) {
            false
        } else {
            self.blacklist.insert(user_id);
            true
        }
    }

    pub fn is_blacklisted(&self, user_id: UserId) -> bool {
        self.blacklist.contains(&user_id)
    }

    pub fn blacklist_summary(&self) -> String {
        match self.blacklist.len() {
            0 => "No users currently blacklisted.".to_string(),
            1 => "1 user blacklisted.".to_string(),
            n => format!("{} users blacklisted.", n),
        }
    }

    pub fn channel_summary(&self) -> String {
        match self.channels.len() {
            0 => "No channels currently enabled.".to_string(),
            1 => "1 channel enabled.".to_string(),
            n => format!("{} channels enabled.", n),
        }
    }

    /// Configured channels with their emojis, sorted by channel id
    pub fn channel_entries(&self) -> Vec<(ChannelId, String)> {
        let mut entries: Vec<(ChannelId, String)> = self
            .channels
            .iter()
            .map(|(id, emoji)| (*id, emoji.clone()))
            .collect();
        entries.sort_by_key(|(id, _)| id.get());
        entries
    }
}
