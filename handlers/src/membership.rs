//! Greets users who become members of a chat.

use std::sync::Arc;

use async_trait::async_trait;
use botkit_api::BotApi;
use botkit_core::{predicates, Handler, HandlerError, Result, Update};
use tracing::instrument;

pub struct WelcomeNewMemberHandler {
    api: Arc<dyn BotApi>,
}

impl WelcomeNewMemberHandler {
    pub fn new(api: Arc<dyn BotApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Handler for WelcomeNewMemberHandler {
    fn can_handle(&self, update: &Update) -> bool {
        predicates::is_membership_change(update)
            && update
                .chat_member()
                .and_then(|c| c.new_status())
                .map(|s| s == "member")
                .unwrap_or(false)
    }

    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let chat_id = update
            .chat_id()
            .ok_or(HandlerError::MissingField("chat_member.chat.id"))?;
        let name = update
            .chat_member()
            .and_then(|c| c.affected_user())
            .and_then(|u| u.display_name())
            .unwrap_or_else(|| "new member".to_string());
        self.api
            .send_message(chat_id, &format!("Welcome, {}!", name), None)
            .await
    }

    fn name(&self) -> &str {
        "welcome_new_member"
    }
}
