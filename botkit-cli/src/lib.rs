//! # botkit-cli
//!
//! Command-line entry: argument parsing, config loading and process wiring.

pub mod app;
pub mod cli;

pub use app::{run_bot, set_commands};
pub use cli::{load_config, parse_allowed_users, resolve_allowed_users, Cli, Commands};
pub use botkit_telegram::TelegramConfig;
