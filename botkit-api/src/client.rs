//! [`BotApi`] facade and its HTTP implementation [`TelegramClient`].

use std::sync::Arc;

use async_trait::async_trait;
use botkit_core::{
    decode_batch, default_error_log, BotCommand, BotError, DecodeError, DecodePolicy, ErrorLog,
    InlineKeyboardMarkup, Result, Update,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::requests::{
    AnswerCallbackQuery, ApiRequest, EditMessageReplyMarkup, EditMessageText, GetUpdates,
    SendMessage, SendPhoto, SetMyCommands,
};
use crate::response::ApiResponse;
use crate::transport::Transport;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Outbound operations. Each call is one request/response round trip with no retry.
///
/// `send_message` reports failures through the error log and returns `Ok(())`; every other
/// operation returns the failure to the caller.
#[async_trait]
pub trait BotApi: Send + Sync {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()>;

    /// Long poll: blocks up to `timeout_secs` waiting for updates with `update_id >= offset`.
    async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>>;

    /// Acknowledge a callback. Call at most once per callback id; not enforced here.
    async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: Option<bool>,
    ) -> Result<()>;

    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()>;

    /// `None` removes the keyboard.
    async fn edit_message_reply_markup(
        &self,
        chat_id: i64,
        message_id: i64,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()>;

    async fn send_photo(&self, chat_id: i64, photo: &str, caption: Option<&str>) -> Result<()>;

    async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<()>;
}

/// Masks the secret half of a `<bot id>:<secret>` token for logging.
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) if !id.is_empty() => format!("{}:***", id),
        _ => "***".to_string(),
    }
}

/// HTTP session: immutable token, base URL, transport and error log. No per-call state, so one
/// instance can serve any number of concurrent handlers.
#[derive(Clone)]
pub struct TelegramClient {
    token: String,
    api_url: String,
    transport: Arc<dyn Transport>,
    error_log: Arc<dyn ErrorLog>,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            transport,
            error_log: default_error_log(),
        }
    }

    /// Points the client at another API server (local Bot API server, test server).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_error_log(mut self, error_log: Arc<dyn ErrorLog>) -> Self {
        self.error_log = error_log;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Serializes `request`, posts it, and checks the envelope. A 2xx body that is not an
    /// envelope is accepted as success.
    async fn call<R: ApiRequest>(&self, request: &R) -> Result<()> {
        let body = serde_json::to_vec(request)?;
        debug!(
            method = R::METHOD,
            bot = %mask_token(&self.token),
            payload = %String::from_utf8_lossy(&body),
            "step: api request"
        );

        let response = self
            .transport
            .post_json(&self.method_url(R::METHOD), body)
            .await?;

        match ApiResponse::<Value>::parse(&response.body) {
            Ok(envelope) => envelope.into_result().map(|_| ()),
            Err(e) => {
                debug!(method = R::METHOD, error = %e, "non-envelope success body");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl BotApi for TelegramClient {
    #[instrument(skip(self, text, reply_markup))]
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        let request = SendMessage {
            chat_id,
            text: text.to_string(),
            reply_markup,
        };
        if let Err(e) = self.call(&request).await {
            self.error_log
                .log(&format!("sendMessage to chat {} failed: {}", chat_id, e));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let query = GetUpdates::new(offset, timeout_secs).query()?;
        // The parse error never echoes the URL, so the token stays out of it.
        let url = reqwest::Url::parse_with_params(&self.method_url(GetUpdates::METHOD), &query)
            .map_err(|e| BotError::Config(format!("invalid API URL: {}", e)))?;
        let response = self.transport.get(url.as_str()).await?;

        let raw = ApiResponse::<Vec<Value>>::parse(&response.body)?
            .into_result()?
            .ok_or_else(|| DecodeError::Malformed("getUpdates response has no result".to_string()))?;

        let updates = decode_batch(&raw, DecodePolicy::Precedence);
        debug!(received = raw.len(), decoded = updates.len(), "step: updates fetched");
        Ok(updates)
    }

    #[instrument(skip(self, text))]
    async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: Option<bool>,
    ) -> Result<()> {
        self.call(&AnswerCallbackQuery {
            callback_query_id: callback_query_id.to_string(),
            text: text.map(str::to_string),
            show_alert,
        })
        .await
    }

    #[instrument(skip(self, text, reply_markup))]
    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        self.call(&EditMessageText {
            chat_id,
            message_id,
            text: text.to_string(),
            reply_markup,
        })
        .await
    }

    #[instrument(skip(self, reply_markup))]
    async fn edit_message_reply_markup(
        &self,
        chat_id: i64,
        message_id: i64,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        self.call(&EditMessageReplyMarkup {
            chat_id,
            message_id,
            reply_markup,
        })
        .await
    }

    #[instrument(skip(self, caption))]
    async fn send_photo(&self, chat_id: i64, photo: &str, caption: Option<&str>) -> Result<()> {
        self.call(&SendPhoto {
            chat_id,
            photo: photo.to_string(),
            caption: caption.map(str::to_string),
        })
        .await
    }

    #[instrument(skip(self, commands), fields(count = commands.len()))]
    async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<()> {
        self.call(&SetMyCommands {
            commands: commands.to_vec(),
        })
        .await
    }
}
