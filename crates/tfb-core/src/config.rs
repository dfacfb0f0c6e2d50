use std::{env, fmt, time::Duration};

use crate::{errors::Error, Result};

const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Typed configuration for the bot, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    /// Telegram bot credential (`BOT_TOKEN`).
    pub bot_token: String,

    // Backend endpoints
    pub register_url: String,
    pub login_url: String,
    /// Sent as `X-Telegram-Token` on register calls only.
    pub telegram_secret: String,

    pub backend_timeout: Duration,
}

impl Config {
    /// Load from the process environment, after applying `.env` if present.
    pub fn load() -> Result<Self> {
        // Existing environment always wins over the file.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("failed to read .env: {e}");
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN").unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        // Empty URLs are accepted; requests against them fail at call time.
        let register_url = lookup("API_URL_ADD").unwrap_or_default();
        let login_url = lookup("API_URL_LOGIN").unwrap_or_default();
        let telegram_secret = lookup("TELEGRAM_SECRET_TOKEN").unwrap_or_default();

        let backend_timeout = Duration::from_secs(
            lookup("BACKEND_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS),
        );

        Ok(Self {
            bot_token,
            register_url,
            login_url,
            telegram_secret,
            backend_timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("register_url", &self.register_url)
            .field("login_url", &self.login_url)
            .field("telegram_secret", &"<redacted>")
            .field("backend_timeout", &self.backend_timeout)
            .finish()
    }
}
