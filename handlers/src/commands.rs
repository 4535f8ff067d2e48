//! Command handlers: `/start`, `/help`, `/photo <url> [caption]`.

use std::sync::Arc;

use async_trait::async_trait;
use botkit_api::BotApi;
use botkit_core::{predicates, BotCommand, Handler, HandlerError, Result, Update};
use tracing::{info, instrument};

use crate::vote::vote_keyboard;

/// Command list registered with the platform at startup.
pub fn default_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Start the bot"),
        BotCommand::new("help", "List commands"),
        BotCommand::new("photo", "Send a photo by URL: /photo <url> [caption]"),
    ]
}

fn chat_id(update: &Update) -> Result<i64> {
    Ok(update
        .chat_id()
        .ok_or(HandlerError::MissingField("chat.id"))?)
}

/// Greets the sender and attaches the vote keyboard.
pub struct StartHandler {
    api: Arc<dyn BotApi>,
}

impl StartHandler {
    pub fn new(api: Arc<dyn BotApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Handler for StartHandler {
    fn can_handle(&self, update: &Update) -> bool {
        predicates::is_command(update, "/start")
    }

    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let chat_id = chat_id(update)?;
        let name = update
            .sender()
            .and_then(|u| u.display_name())
            .unwrap_or_else(|| "there".to_string());
        info!(chat_id, "Sending start greeting");
        self.api
            .send_message(
                chat_id,
                &format!("Hello, {}! Do you like this bot?", name),
                Some(vote_keyboard()),
            )
            .await
    }

    fn name(&self) -> &str {
        "start"
    }
}

pub struct HelpHandler {
    api: Arc<dyn BotApi>,
}

impl HelpHandler {
    pub fn new(api: Arc<dyn BotApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    fn can_handle(&self, update: &Update) -> bool {
        predicates::is_command(update, "/help")
    }

    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let text = default_commands()
            .iter()
            .map(|c| format!("/{} - {}", c.command, c.description))
            .collect::<Vec<_>>()
            .join("\n");
        self.api.send_message(chat_id(update)?, &text, None).await
    }

    fn name(&self) -> &str {
        "help"
    }
}

/// `/photo <url> [caption]`: forwards the reference to `sendPhoto`.
pub struct PhotoHandler {
    api: Arc<dyn BotApi>,
}

impl PhotoHandler {
    pub fn new(api: Arc<dyn BotApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Handler for PhotoHandler {
    fn can_handle(&self, update: &Update) -> bool {
        predicates::is_command(update, "/photo")
    }

    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let chat_id = chat_id(update)?;
        let args = update
            .message()
            .and_then(|m| m.command_args())
            .unwrap_or("");
        let (photo, caption) = match args.split_once(char::is_whitespace) {
            Some((photo, caption)) => (photo, Some(caption.trim()).filter(|c| !c.is_empty())),
            None => (args, None),
        };
        if photo.is_empty() {
            self.api
                .send_message(chat_id, "Usage: /photo <url> [caption]", None)
                .await?;
            return Err(HandlerError::InvalidCommand("/photo without a photo".to_string()).into());
        }
        self.api.send_photo(chat_id, photo, caption).await
    }

    fn name(&self) -> &str {
        "photo"
    }
}
