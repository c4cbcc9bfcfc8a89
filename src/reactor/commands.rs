use serenity::model::id::UserId;

/// Parsed configuration command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle auto-react for the current channel with the default emoji
    Toggle,
    /// Set or update the current channel's reaction emoji
    SetEmoji(String),
    /// Remove the current channel's configuration
    Remove,
    /// Toggle blacklist membership for a user
    Blacklist(UserId),
    /// Summarize the blacklist and the configured channels
    Status,
}

/// Parse a message as a configuration command
///
/// Returns `None` for anything that is not a well-formed command addressed to
/// the given prefix, including commands with a missing or unparsable target.
pub fn parse(prefix: &str, content: &str) -> Option<Command> {
    let content = content.trim();
    let rest = content.strip_prefix(prefix)?;

    // Reject prefix run together with other text, e.g. "!autoreactx"
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut words = rest.split_whitespace();
    match words.next()? {
        "toggle" => Some(Command::Toggle),
        "remove" => Some(Command::Remove),
        "status" => Some(Command::Status),
        "emoji" => words.next().map(|emoji| Command::SetEmoji(emoji.to_string())),
        "blacklist" => parse_user_target(words.next()?).map(Command::Blacklist),
        _ => None,
    }
}

/// Parse a user given as a mention (`<@id>` / `<@!id>`) or a raw id
fn parse_user_target(token: &str) -> Option<UserId> {
    let id = token
        .strip_prefix("<@")
        .and_then(|s| s.strip_suffix('>'))
        .map(|s| s.strip_prefix('!').unwrap_or(s))
        .unwrap_or(token);

    let id: u64 = id.parse().ok()?;
    if id == 0 {
        return None;
    }
    Some(UserId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PREFIX: &str = "!autoreact";

    #[rstest]
    #[case::toggle("!autoreact toggle", Command::Toggle)]
    #[case::remove("!autoreact remove", Command::Remove)]
    #[case::status("!autoreact status", Command::Status)]
    #[case::extra_spaces("  !autoreact   toggle  ", Command::Toggle)]
    #[case::emoji("!autoreact emoji 🔥", Command::SetEmoji("🔥".to_string()))]
    #[case::custom_emoji(
        "!autoreact emoji <:blob:123>",
        Command::SetEmoji("<:blob:123>".to_string())
    )]
    #[case::blacklist_raw_id("!autoreact blacklist 42", Command::Blacklist(UserId::new(42)))]
    #[case::blacklist_mention(
        "!autoreact blacklist <@42>",
        Command::Blacklist(UserId::new(42))
    )]
    #[case::blacklist_nick_mention(
        "!autoreact blacklist <@!42>",
        Command::Blacklist(UserId::new(42))
    )]
    fn test_parse_valid_commands(#[case] content: &str, #[case] expected: Command) {
        assert_eq!(parse(PREFIX, content), Some(expected));
    }

    #[rstest]
    #[case::plain_message("hello there")]
    #[case::prefix_only("!autoreact")]
    #[case::prefix_run_together("!autoreactx toggle")]
    #[case::unknown_subcommand("!autoreact explode")]
    #[case::emoji_without_argument("!autoreact emoji")]
    #[case::blacklist_without_target("!autoreact blacklist")]
    #[case::blacklist_non_numeric("!autoreact blacklist bob")]
    #[case::blacklist_zero_id("!autoreact blacklist 0")]
    #[case::blacklist_malformed_mention("!autoreact blacklist <@abc>")]
    fn test_parse_rejects_malformed_input(#[case] content: &str) {
        assert_eq!(parse(PREFIX, content), None);
    }
}
