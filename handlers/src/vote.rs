//! Vote keyboard and its callback handler.

use std::sync::Arc;

use async_trait::async_trait;
use botkit_api::BotApi;
use botkit_core::{
    predicates, Handler, HandlerError, InlineKeyboardButton, InlineKeyboardMarkup, Result, Update,
};
use tracing::{debug, instrument};

/// Callback payloads are `vote:<choice>`.
pub const VOTE_TAG: &str = "vote";

pub fn vote_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::default().row(vec![
        InlineKeyboardButton::callback("👍 Like", format!("{}:like", VOTE_TAG)),
        InlineKeyboardButton::callback("👎 Dislike", format!("{}:dislike", VOTE_TAG)),
    ])
}

/// Acknowledges the press, then replaces the keyboard message with the recorded choice.
pub struct VoteCallbackHandler {
    api: Arc<dyn BotApi>,
}

impl VoteCallbackHandler {
    pub fn new(api: Arc<dyn BotApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Handler for VoteCallbackHandler {
    fn can_handle(&self, update: &Update) -> bool {
        predicates::is_callback_with(update, VOTE_TAG)
    }

    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let query = update
            .callback_query()
            .ok_or(HandlerError::MissingField("callback_query"))?;
        let query_id = query
            .id
            .as_deref()
            .ok_or(HandlerError::MissingField("callback_query.id"))?;
        let choice = query
            .data
            .as_deref()
            .and_then(|d| d.split_once(':'))
            .map(|(_, choice)| choice)
            .unwrap_or("");

        let answer = match choice {
            "like" => "Thanks for the like!",
            "dislike" => "Sorry to hear that.",
            other => {
                self.api
                    .answer_callback_query(query_id, Some("Unknown choice"), Some(true))
                    .await?;
                return Err(HandlerError::InvalidCommand(format!("vote:{}", other)).into());
            }
        };
        self.api
            .answer_callback_query(query_id, Some(answer), None)
            .await?;

        // Without the originating message there is nothing to edit.
        let target = query
            .message
            .as_ref()
            .and_then(|m| Some((m.chat_id()?, m.message_id?)));
        match target {
            Some((chat_id, message_id)) => {
                self.api
                    .edit_message_text(chat_id, message_id, &format!("You voted: {}", choice), None)
                    .await
            }
            None => {
                debug!("callback without originating message; skipping edit");
                Ok(())
            }
        }
    }

    fn name(&self) -> &str {
        "vote_callback"
    }
}
