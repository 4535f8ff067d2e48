//! Request bodies, one struct per API method. Absent optional fields are omitted from the JSON
//! entirely; no `null` placeholders are ever written.

use botkit_core::{BotCommand, InlineKeyboardMarkup};
use serde::{Deserialize, Serialize};

/// A request body bound to its API method name.
pub trait ApiRequest: Serialize + Send + Sync {
    const METHOD: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl ApiRequest for SendMessage {
    const METHOD: &'static str = "sendMessage";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
}

impl ApiRequest for AnswerCallbackQuery {
    const METHOD: &'static str = "answerCallbackQuery";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMessageText {
    pub chat_id: i64,
    pub message_id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl ApiRequest for EditMessageText {
    const METHOD: &'static str = "editMessageText";
}

/// `reply_markup: None` removes the keyboard from the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditMessageReplyMarkup {
    pub chat_id: i64,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl ApiRequest for EditMessageReplyMarkup {
    const METHOD: &'static str = "editMessageReplyMarkup";
}

/// `photo` is either an HTTP URL or a file handle previously returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendPhoto {
    pub chat_id: i64,
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ApiRequest for SendPhoto {
    const METHOD: &'static str = "sendPhoto";
}

/// Replaces the whole command list shown by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
}

impl ApiRequest for SetMyCommands {
    const METHOD: &'static str = "setMyCommands";
}

/// Update kinds requested from the platform. `chat_member` is only delivered when listed.
pub const ALLOWED_UPDATES: &[&str] = &["message", "callback_query", "chat_member"];

/// Query of the long-poll call. Sent as URL query parameters, not as a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUpdates {
    pub offset: i64,
    pub timeout: u64,
    pub allowed_updates: &'static [&'static str],
}

impl GetUpdates {
    pub const METHOD: &'static str = "getUpdates";

    pub fn new(offset: i64, timeout: u64) -> Self {
        Self {
            offset,
            timeout,
            allowed_updates: ALLOWED_UPDATES,
        }
    }

    /// Unencoded query pairs; `allowed_updates` is a JSON array.
    pub fn query(&self) -> serde_json::Result<Vec<(&'static str, String)>> {
        Ok(vec![
            ("offset", self.offset.to_string()),
            ("timeout", self.timeout.to_string()),
            ("allowed_updates", serde_json::to_string(self.allowed_updates)?),
        ])
    }
}
