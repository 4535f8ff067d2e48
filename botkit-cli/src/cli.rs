//! CLI parser and config loading.

use std::env;

use anyhow::{Context, Result};
use botkit_telegram::TelegramConfig;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "botkit")]
#[command(about = "Long-polling Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Comma-separated user ids; overrides ALLOWED_USER_IDS. Empty means everyone.
        #[arg(long)]
        allowed_users: Option<String>,
        /// Poll a single batch and exit.
        #[arg(long)]
        once: bool,
    },
    /// Register the command list with the platform and exit.
    SetCommands {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Load TelegramConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<TelegramConfig> {
    TelegramConfig::from_env(token)
}

/// Parses `"1, 2,3"` into user ids. Blank input yields an empty list.
pub fn parse_allowed_users(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("invalid user id in allowlist: {:?}", s))
        })
        .collect()
}

/// Allowlist from the flag when given, else from ALLOWED_USER_IDS.
pub fn resolve_allowed_users(flag: Option<String>) -> Result<Vec<i64>> {
    match flag.or_else(|| env::var("ALLOWED_USER_IDS").ok()) {
        Some(raw) => parse_allowed_users(&raw),
        None => Ok(Vec::new()),
    }
}
