//! # botkit-api
//!
//! Outbound command facade: the [`BotApi`] operations, their request bodies, the response envelope,
//! and the [`Transport`] seam with a reqwest implementation. Stateless apart from the immutable
//! session (token, base URL, transport).

pub mod client;
pub mod requests;
pub mod response;
pub mod transport;

pub use client::{mask_token, BotApi, TelegramClient, DEFAULT_API_URL};
pub use response::ApiResponse;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
