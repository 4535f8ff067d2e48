//! Unit test module
//!
//! Handler unit tests live here, separate from source files. Handlers talk to a recording
//! [`BotApi`] so tests can assert on the exact outbound calls.

mod chain_test;

use std::sync::Mutex;

use async_trait::async_trait;
use botkit_api::BotApi;
use botkit_core::{
    BotCommand, CallbackQuery, Chat, ChatMember, ChatMemberUpdated, InlineKeyboardMarkup, Message,
    Result, Update, UpdateKind, User,
};

/// One outbound call, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SendMessage {
        chat_id: i64,
        text: String,
        markup: Option<InlineKeyboardMarkup>,
    },
    AnswerCallback {
        id: String,
        text: Option<String>,
        show_alert: Option<bool>,
    },
    EditText {
        chat_id: i64,
        message_id: i64,
        text: String,
    },
    EditMarkup {
        chat_id: i64,
        message_id: i64,
    },
    SendPhoto {
        chat_id: i64,
        photo: String,
        caption: Option<String>,
    },
    SetCommands(Vec<BotCommand>),
}

#[derive(Default)]
pub(crate) struct RecordingApi {
    calls: Mutex<Vec<Call>>,
}

impl RecordingApi {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

#[async_trait]
impl BotApi for RecordingApi {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        self.record(Call::SendMessage {
            chat_id,
            text: text.to_string(),
            markup: reply_markup,
        })
    }

    async fn get_updates(&self, _offset: i64, _timeout_secs: u64) -> Result<Vec<Update>> {
        Ok(Vec::new())
    }

    async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: Option<bool>,
    ) -> Result<()> {
        self.record(Call::AnswerCallback {
            id: callback_query_id.to_string(),
            text: text.map(str::to_string),
            show_alert,
        })
    }

    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        _reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        self.record(Call::EditText {
            chat_id,
            message_id,
            text: text.to_string(),
        })
    }

    async fn edit_message_reply_markup(
        &self,
        chat_id: i64,
        message_id: i64,
        _reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        self.record(Call::EditMarkup {
            chat_id,
            message_id,
        })
    }

    async fn send_photo(&self, chat_id: i64, photo: &str, caption: Option<&str>) -> Result<()> {
        self.record(Call::SendPhoto {
            chat_id,
            photo: photo.to_string(),
            caption: caption.map(str::to_string),
        })
    }

    async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<()> {
        self.record(Call::SetCommands(commands.to_vec()))
    }
}

pub(crate) fn user(id: i64, first_name: &str) -> User {
    User {
        id: Some(id),
        is_bot: Some(false),
        first_name: Some(first_name.to_string()),
        ..Default::default()
    }
}

pub(crate) fn chat(id: i64) -> Chat {
    Chat {
        id: Some(id),
        chat_type: Some("private".to_string()),
        ..Default::default()
    }
}

/// Text message from user 1 ("Ann") in chat 42.
pub(crate) fn text_update(update_id: i64, text: &str) -> Update {
    Update::new(
        update_id,
        UpdateKind::Message(Message {
            message_id: Some(10),
            from: Some(user(1, "Ann")),
            chat: Some(chat(42)),
            date: Some(1_706_529_600),
            text: Some(text.to_string()),
        }),
    )
}

/// Callback from user 1 on message 10 in chat 42.
pub(crate) fn callback_update(update_id: i64, id: &str, data: &str) -> Update {
    Update::new(
        update_id,
        UpdateKind::CallbackQuery(CallbackQuery {
            id: Some(id.to_string()),
            from: Some(user(1, "Ann")),
            message: Some(Message {
                message_id: Some(10),
                chat: Some(chat(42)),
                ..Default::default()
            }),
            data: Some(data.to_string()),
        }),
    )
}

pub(crate) fn member_update(update_id: i64, status: &str) -> Update {
    Update::new(
        update_id,
        UpdateKind::ChatMember(ChatMemberUpdated {
            chat: Some(Chat {
                id: Some(-100),
                chat_type: Some("supergroup".to_string()),
                title: Some("Room".to_string()),
                ..Default::default()
            }),
            from: Some(user(9, "Admin")),
            old_chat_member: None,
            new_chat_member: Some(ChatMember {
                user: Some(user(3, "Bo")),
                status: Some(status.to_string()),
            }),
        }),
    )
}
