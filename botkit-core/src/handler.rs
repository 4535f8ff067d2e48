//! The [`Handler`] capability: a pure predicate plus an async action.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Update;

/// Unit of business logic the chain may pick for an update.
///
/// Handlers are built once and shared across every update, so they must not keep per-update
/// mutable state. A shared facade handle (e.g. `Arc<dyn BotApi>`) is fine.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Whether this handler applies. Must be side-effect free.
    fn can_handle(&self, update: &Update) -> bool;

    /// Produces the handler's effects for an update it accepted.
    async fn handle(&self, update: &Update) -> Result<()>;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
