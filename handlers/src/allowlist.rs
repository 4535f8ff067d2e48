//! Allowlist guard: claims updates from senders outside the allowlist so nothing else runs.

use async_trait::async_trait;
use botkit_core::{Handler, HandlerError, Result, Update};
use tracing::{instrument, warn};

pub struct AllowlistGuard {
    allowed_users: Vec<i64>,
}

impl AllowlistGuard {
    /// Creates a guard that lets only the given user ids through.
    pub fn new(allowed_users: Vec<i64>) -> Self {
        Self { allowed_users }
    }
}

#[async_trait]
impl Handler for AllowlistGuard {
    /// Claims updates whose sender id is known and not allowed. Updates without a sender id pass.
    fn can_handle(&self, update: &Update) -> bool {
        update
            .sender()
            .and_then(|u| u.id)
            .map(|id| !self.allowed_users.contains(&id))
            .unwrap_or(false)
    }

    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let user_id = update.sender().and_then(|u| u.id);
        warn!(user_id = ?user_id, "Unauthorized access attempt");
        Err(HandlerError::Unauthorized.into())
    }

    fn name(&self) -> &str {
        "allowlist_guard"
    }
}
