//! Formatting utilities for Telegram HTML replies.

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap a value in `<code>` so Telegram renders it tap-to-copy.
pub fn code_html(text: &str) -> String {
    format!("<code>{}</code>", escape_html(text))
}
