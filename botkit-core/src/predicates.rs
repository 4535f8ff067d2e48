//! Side-effect free predicates over an update's shape, for use in [`crate::Handler::can_handle`].

use crate::types::{Message, Update};

/// True for a text message whose leading token is `command` (`/start`, `/start@bot`, `/start args`).
/// The leading slash on `command` is optional.
pub fn is_command(update: &Update, command: &str) -> bool {
    let wanted = command.trim_start_matches('/');
    update
        .message()
        .and_then(Message::command)
        .map(|c| &c[1..] == wanted)
        .unwrap_or(false)
}

/// True for any message update that has text.
pub fn is_text(update: &Update) -> bool {
    update.text().is_some()
}

/// True for a callback whose payload is `tag` or starts with `tag:`.
pub fn is_callback_with(update: &Update, tag: &str) -> bool {
    update
        .callback_query()
        .and_then(|q| q.data.as_deref())
        .map(|data| {
            data == tag
                || data
                    .strip_prefix(tag)
                    .map(|rest| rest.starts_with(':'))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}

pub fn is_callback(update: &Update) -> bool {
    update.callback_query().is_some()
}

pub fn is_membership_change(update: &Update) -> bool {
    update.chat_member().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CallbackQuery, ChatMemberUpdated, UpdateKind};

    fn text(t: &str) -> Update {
        Update::new(
            1,
            UpdateKind::Message(Message {
                text: Some(t.to_string()),
                ..Default::default()
            }),
        )
    }

    fn callback(data: Option<&str>) -> Update {
        Update::new(
            2,
            UpdateKind::CallbackQuery(CallbackQuery {
                id: Some("cb".to_string()),
                data: data.map(str::to_string),
                ..Default::default()
            }),
        )
    }

    #[test]
    fn test_is_command() {
        assert!(is_command(&text("/start"), "/start"));
        assert!(is_command(&text("/start"), "start"));
        assert!(is_command(&text("/start@my_bot"), "/start"));
        assert!(is_command(&text("/start 123"), "/start"));
        assert!(!is_command(&text("/started"), "/start"));
        assert!(!is_command(&text("start"), "/start"));
        assert!(!is_command(&callback(Some("/start")), "/start"));
    }

    #[test]
    fn test_is_callback_with() {
        assert!(is_callback_with(&callback(Some("like")), "like"));
        assert!(is_callback_with(&callback(Some("like:42")), "like"));
        assert!(!is_callback_with(&callback(Some("likes")), "like"));
        assert!(!is_callback_with(&callback(None), "like"));
        assert!(!is_callback_with(&text("like"), "like"));
    }

    #[test]
    fn test_kind_predicates() {
        let member = Update::new(3, UpdateKind::ChatMember(ChatMemberUpdated::default()));
        assert!(is_membership_change(&member));
        assert!(!is_membership_change(&text("x")));
        assert!(is_callback(&callback(None)));
        assert!(is_text(&text("x")));
        assert!(!is_text(&Update::new(4, UpdateKind::Unrecognized)));
    }

    #[test]
    fn test_predicates_do_not_consume_update() {
        let update = text("/start");
        let before = update.clone();
        let _ = is_command(&update, "/start");
        let _ = is_callback_with(&update, "x");
        assert_eq!(update, before);
    }
}
