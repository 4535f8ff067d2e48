//! # botkit-telegram
//!
//! Poll loop layer: configuration, cursor, backoff and the long-poll [`Poller`] that feeds updates
//! into a [`handler_chain::HandlerChain`]. No business logic lives here.

mod backoff;
mod config;
mod cursor;
mod runner;

pub use backoff::Backoff;
pub use config::{
    TelegramConfig, DEFAULT_BACKOFF_INITIAL_SECS, DEFAULT_BACKOFF_MAX_SECS, DEFAULT_LOG_FILE,
    DEFAULT_POLL_TIMEOUT_SECS,
};
pub use cursor::Cursor;
pub use runner::{PollStats, Poller};
