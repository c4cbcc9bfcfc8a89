//! Encoding of the reactor collections to/from the settings store.
//!
//! Each field is a full snapshot: the whole collection is re-encoded on every
//! mutation. An absent field decodes to the empty collection; a field that is
//! present but malformed is an error, so a corrupt store aborts hydration
//! instead of being silently replaced.

use super::state::ReactorState;
use crate::adapters::SettingsStore;
use anyhow::Context as _;
use serenity::model::id::{ChannelId, UserId};
use std::collections::{HashMap, HashSet};

/// Store field holding the blacklisted user ids (JSON array of id strings)
pub const BLACKLIST_KEY: &str = "blacklisted_users";

/// Store field holding the channel → emoji pairs (JSON array of `[id, emoji]`)
pub const CHANNELS_KEY: &str = "channel_settings";

/// Hydrate reactor state from the settings store
pub fn load(store: &impl SettingsStore) -> anyhow::Result<ReactorState> {
    let blacklist = match store.read(BLACKLIST_KEY)? {
        Some(raw) => decode_blacklist(&raw)?,
        None => HashSet::new(),
    };

    let channels = match store.read(CHANNELS_KEY)? {
        Some(raw) => decode_channels(&raw)?,
        None => HashMap::new(),
    };

    Ok(ReactorState { blacklist, channels })
}

pub fn encode_blacklist(blacklist: &HashSet<UserId>) -> anyhow::Result<String> {
    let mut ids: Vec<u64> = blacklist.iter().map(|id| id.get()).collect();
    ids.sort_unstable();
    let ids: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();

    serde_json::to_string(&ids).context("Encoding blacklist")
}

pub fn decode_blacklist(raw: &str) -> anyhow::Result<HashSet<UserId>> {
    let ids: Vec<String> =
        serde_json::from_str(raw).context("Decoding blacklist field")?;

    ids.iter().map(|id| parse_id(id).map(UserId::new)).collect()
}

pub fn encode_channels(channels: &HashMap<ChannelId, String>) -> anyhow::Result<String> {
    let mut entries: Vec<(u64, &str)> = channels
        .iter()
        .map(|(id, emoji)| (id.get(), emoji.as_str()))
        .collect();
    entries.sort_unstable_by_key(|(id, _)| *id);
    let entries: Vec<(String, &str)> = entries
        .into_iter()
        .map(|(id, emoji)| (id.to_string(), emoji))
        .collect();

    serde_json::to_string(&entries).context("Encoding channel settings")
}

pub fn decode_channels(raw: &str) -> anyhow::Result<HashMap<ChannelId, String>> {
    let entries: Vec<(String, String)> =
        serde_json::from_str(raw).context("Decoding channel settings field")?;

    entries
        .into_iter()
        .map(|(id, emoji)| Ok((ChannelId::new(parse_id(&id)?), emoji)))
        .collect()
}

fn parse_id(id: &str) -> anyhow::Result<u64> {
    let parsed: u64 = id
        .parse()
        .with_context(|| format!("Invalid id in settings: {:?}", id))?;
    anyhow::ensure!(parsed != 0, "Invalid id in settings: 0");
    Ok(parsed)
}
