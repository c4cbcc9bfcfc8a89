use super::reactable_message::{MessageEventKind, ReactableMessage};
use super::state::ReactorState;

/// Decide whether a message event earns a reaction, and with which emoji
///
/// Pure filter chain, evaluated per event, checks in order:
///
/// 1. Only genuine, server-confirmed creation events qualify.
/// 2. The channel must have a configured reaction emoji.
/// 3. The author must not be blacklisted (authorless messages pass).
/// 4. The configured emoji, after trimming whitespace, must be non-empty.
pub fn reaction_for<'s, M: ReactableMessage>(
    state: &'s ReactorState,
    event: &M,
) -> Option<&'s str> {
    if event.kind() != MessageEventKind::Created || event.is_optimistic() {
        return None;
    }

    let emoji = state.emoji_for(event.channel_id())?;

    if let Some(author) = event.author_id() {
        if state.is_blacklisted(author) {
            return None;
        }
    }

    let emoji = emoji.trim();
    if emoji.is_empty() {
        return None;
    }

    Some(emoji)
}
