//! Tests for build_default_chain: order, allowlist guard, and first-match dispatch.

use std::sync::Arc;

use botkit_core::{default_error_log, Handler, Update, UpdateKind};
use handler_chain::DispatchOutcome;

use super::{callback_update, member_update, text_update, Call, RecordingApi};
use crate::{build_default_chain, AllowlistGuard};

#[tokio::test]
async fn test_default_chain_without_allowlist() {
    let api = Arc::new(RecordingApi::default());
    let chain = build_default_chain(api.clone(), Vec::new(), default_error_log());
    assert_eq!(chain.len(), 5);

    assert_eq!(
        chain.dispatch(&text_update(1, "/start")).await,
        DispatchOutcome::Handled { index: 0 }
    );
    assert_eq!(
        chain.dispatch(&callback_update(2, "cb", "vote:like")).await,
        DispatchOutcome::Handled { index: 3 }
    );
    assert_eq!(
        chain.dispatch(&member_update(3, "member")).await,
        DispatchOutcome::Handled { index: 4 }
    );
    assert_eq!(
        chain.dispatch(&text_update(4, "just chatting")).await,
        DispatchOutcome::Unhandled
    );
    assert_eq!(
        chain.dispatch(&Update::new(5, UpdateKind::Unrecognized)).await,
        DispatchOutcome::Unhandled
    );
    assert_eq!(api.calls().len(), 4);
}

#[tokio::test]
async fn test_allowlist_guard_blocks_strangers_first() {
    let api = Arc::new(RecordingApi::default());
    let chain = build_default_chain(api.clone(), vec![2, 3], default_error_log());
    assert_eq!(chain.len(), 6);

    // Sender 1 is not allowed: the guard claims the update and nothing is sent.
    assert_eq!(
        chain.dispatch(&text_update(1, "/start")).await,
        DispatchOutcome::Failed { index: 0 }
    );
    assert!(api.calls().is_empty());

    // Membership updates are sent by user 9 (the admin) in these fixtures; not allowed either.
    assert_eq!(
        chain.dispatch(&member_update(2, "member")).await,
        DispatchOutcome::Failed { index: 0 }
    );
}

#[tokio::test]
async fn test_allowlist_guard_lets_allowed_and_anonymous_through() {
    let guard = AllowlistGuard::new(vec![1]);
    assert!(!guard.can_handle(&text_update(1, "/start")));
    assert!(!guard.can_handle(&Update::new(2, UpdateKind::Unrecognized)));

    let api = Arc::new(RecordingApi::default());
    let chain = build_default_chain(api.clone(), vec![1], default_error_log());
    assert_eq!(
        chain.dispatch(&text_update(3, "/help")).await,
        DispatchOutcome::Handled { index: 2 }
    );
    assert!(matches!(&api.calls()[..], [Call::SendMessage { chat_id: 42, .. }]));
}
