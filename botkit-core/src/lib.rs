//! # botkit-core
//!
//! Core types and traits for the bot toolkit: the inbound [`Update`] model and its lenient decoder,
//! outbound keyboard markup, the [`Handler`] capability with shape predicates, the error taxonomy,
//! and logging setup. Transport-agnostic; used by botkit-api, handler-chain and botkit-telegram.

pub mod decode;
pub mod error;
pub mod handler;
pub mod logger;
pub mod markup;
pub mod predicates;
pub mod types;

pub use decode::{decode_batch, DecodePolicy};
pub use error::{BotError, DecodeError, HandlerError, Result, TransportError};
pub use handler::Handler;
pub use logger::{default_error_log, init_tracing, ErrorLog, TracingErrorLog};
pub use markup::{BotCommand, InlineKeyboardButton, InlineKeyboardMarkup};
pub use types::{
    CallbackQuery, Chat, ChatMember, ChatMemberUpdated, Message, Update, UpdateKind, User,
};
