//! Telegram-style command parsing.

/// Extract the lowercased command name from `/cmd@botname arg1 ...`.
///
/// Arguments are dropped; no command takes any. Returns `None` for text that
/// is not a command.
pub fn parse_command(text: &str) -> Option<String> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let first = text.split_whitespace().next().unwrap_or("");

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    if cmd.is_empty() {
        return None;
    }
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_addressed_commands() {
        assert_eq!(parse_command("/start"), Some("start".into()));
        assert_eq!(
            parse_command("/Login@trustfund_bot  now please "),
            Some("login".into())
        );
    }

    #[test]
    fn rejects_non_commands() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("/@bot"), None);
        assert_eq!(parse_command(""), None);
    }
}
