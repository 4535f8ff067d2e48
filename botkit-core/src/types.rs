//! Inbound update model: one [`Update`] per offset position, carrying exactly one [`UpdateKind`].
//!
//! Every field of every sub-shape is optional. Payloads are decoded leniently, so an `id` of 0
//! stays distinguishable from an id that was never sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender of a message or callback, or the subject of a membership change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl User {
    /// Best human-readable name: first name, then `@username`.
    pub fn display_name(&self) -> Option<String> {
        self.first_name
            .clone()
            .or_else(|| self.username.as_ref().map(|u| format!("@{}", u)))
    }
}

/// Private chat, group, supergroup or channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// `private`, `group`, `supergroup` or `channel`; not validated.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// A text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,
    /// Unix timestamp (seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Message {
    pub fn chat_id(&self) -> Option<i64> {
        self.chat.as_ref().and_then(|c| c.id)
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.date.and_then(|d| DateTime::from_timestamp(d, 0))
    }

    /// Leading `/command` token of the text, without any `@botname` suffix.
    pub fn command(&self) -> Option<&str> {
        let token = self.text.as_deref()?.split_whitespace().next()?;
        if !token.starts_with('/') || token.len() < 2 {
            return None;
        }
        Some(token.split('@').next().unwrap_or(token))
    }

    /// Text after the leading command token, trimmed. `None` when the text is not a command.
    pub fn command_args(&self) -> Option<&str> {
        self.command()?;
        let text = self.text.as_deref()?.trim_start();
        let rest = text.split_once(char::is_whitespace).map(|(_, r)| r).unwrap_or("");
        Some(rest.trim())
    }
}

/// A press on an inline keyboard button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Opaque id; acknowledge it once via `answerCallbackQuery`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Message that carried the button, for reply targeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    /// Payload chosen by whoever rendered the button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// `creator`, `administrator`, `member`, `restricted`, `left`, `kicked`; not validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Membership change in a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,
    /// Who performed the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_chat_member: Option<ChatMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_member: Option<ChatMember>,
}

impl ChatMemberUpdated {
    pub fn new_status(&self) -> Option<&str> {
        self.new_chat_member.as_ref()?.status.as_deref()
    }

    pub fn affected_user(&self) -> Option<&User> {
        self.new_chat_member.as_ref()?.user.as_ref()
    }
}

/// The populated part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    Message(Message),
    CallbackQuery(CallbackQuery),
    ChatMember(ChatMemberUpdated),
    /// None of the known sub-shapes was present (or decodable).
    Unrecognized,
}

impl UpdateKind {
    /// Wire field name of the variant; `"unrecognized"` otherwise.
    pub fn name(&self) -> &'static str {
        match self {
            UpdateKind::Message(_) => "message",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::ChatMember(_) => "chat_member",
            UpdateKind::Unrecognized => "unrecognized",
        }
    }
}

/// One notification from the platform, tagged with its monotonically increasing id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub update_id: i64,
    pub kind: UpdateKind,
}

impl Update {
    pub fn new(update_id: i64, kind: UpdateKind) -> Self {
        Self { update_id, kind }
    }

    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(m) => Some(m),
            _ => None,
        }
    }

    pub fn callback_query(&self) -> Option<&CallbackQuery> {
        match &self.kind {
            UpdateKind::CallbackQuery(q) => Some(q),
            _ => None,
        }
    }

    pub fn chat_member(&self) -> Option<&ChatMemberUpdated> {
        match &self.kind {
            UpdateKind::ChatMember(c) => Some(c),
            _ => None,
        }
    }

    /// Text of a message update.
    pub fn text(&self) -> Option<&str> {
        self.message()?.text.as_deref()
    }

    /// Chat the update belongs to, for any kind that carries one.
    pub fn chat_id(&self) -> Option<i64> {
        match &self.kind {
            UpdateKind::Message(m) => m.chat_id(),
            UpdateKind::CallbackQuery(q) => q.message.as_ref().and_then(Message::chat_id),
            UpdateKind::ChatMember(c) => c.chat.as_ref().and_then(|chat| chat.id),
            UpdateKind::Unrecognized => None,
        }
    }

    /// User who caused the update.
    pub fn sender(&self) -> Option<&User> {
        match &self.kind {
            UpdateKind::Message(m) => m.from.as_ref(),
            UpdateKind::CallbackQuery(q) => q.from.as_ref(),
            UpdateKind::ChatMember(c) => c.from.as_ref(),
            UpdateKind::Unrecognized => None,
        }
    }
}
