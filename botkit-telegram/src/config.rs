//! Runner configuration: token, API URL, long-poll timeout, backoff bounds, log path.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL, POLL_TIMEOUT_SECS, POLL_BACKOFF_INITIAL_SECS,
//! POLL_BACKOFF_MAX_SECS and LOG_FILE.

use anyhow::Result;
use botkit_api::DEFAULT_API_URL;
use std::env;
use std::time::Duration;

pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKOFF_INITIAL_SECS: u64 = 1;
pub const DEFAULT_BACKOFF_MAX_SECS: u64 = 60;
pub const DEFAULT_LOG_FILE: &str = "logs/botkit.log";

/// Slack added on top of the long-poll timeout for the HTTP request timeout.
const REQUEST_TIMEOUT_SLACK_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub poll_timeout_secs: u64,
    pub backoff_initial_secs: u64,
    pub backoff_max_secs: u64,
    pub log_file: String,
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a non-negative integer, got {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides BOT_TOKEN when provided.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok().filter(|s| !s.is_empty());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        let config = Self {
            bot_token,
            telegram_api_url,
            poll_timeout_secs: env_u64("POLL_TIMEOUT_SECS", DEFAULT_POLL_TIMEOUT_SECS)?,
            backoff_initial_secs: env_u64(
                "POLL_BACKOFF_INITIAL_SECS",
                DEFAULT_BACKOFF_INITIAL_SECS,
            )?,
            backoff_max_secs: env_u64("POLL_BACKOFF_MAX_SECS", DEFAULT_BACKOFF_MAX_SECS)?,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config with the given token and defaults elsewhere.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            backoff_initial_secs: DEFAULT_BACKOFF_INITIAL_SECS,
            backoff_max_secs: DEFAULT_BACKOFF_MAX_SECS,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        if self.backoff_initial_secs == 0 {
            anyhow::bail!("POLL_BACKOFF_INITIAL_SECS must be at least 1");
        }
        if self.backoff_initial_secs > self.backoff_max_secs {
            anyhow::bail!(
                "POLL_BACKOFF_INITIAL_SECS ({}) exceeds POLL_BACKOFF_MAX_SECS ({})",
                self.backoff_initial_secs,
                self.backoff_max_secs
            );
        }
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.telegram_api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// HTTP timeout: long-poll timeout plus slack, so an idle poll is never cut short.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.poll_timeout_secs
                .saturating_add(REQUEST_TIMEOUT_SLACK_SECS),
        )
    }
}
