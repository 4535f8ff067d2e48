//! # Handler chain
//!
//! Ordered list of handlers with first-match dispatch: handlers are tried in registration order,
//! the first whose `can_handle` accepts the update runs, and no other handler runs for that update.
//! Handler failures are reported through the [`ErrorLog`] and never escape [`HandlerChain::dispatch`].

use botkit_core::{default_error_log, ErrorLog, Handler, Update};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// What happened to one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handler at `index` accepted the update and succeeded.
    Handled { index: usize },
    /// Handler at `index` accepted the update and returned an error (already logged).
    Failed { index: usize },
    /// No handler accepted the update; it was dropped.
    Unhandled,
}

/// Handlers in registration order. Cloning shares the handlers.
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
    error_log: Arc<dyn ErrorLog>,
}

impl HandlerChain {
    /// Creates an empty chain reporting errors through tracing.
    pub fn new() -> Self {
        Self::with_error_log(default_error_log())
    }

    /// Creates an empty chain reporting errors through `error_log`.
    pub fn with_error_log(error_log: Arc<dyn ErrorLog>) -> Self {
        Self {
            handlers: Vec::new(),
            error_log,
        }
    }

    /// Appends a handler (tried after every handler added before it).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Appends a handler in place. The same handler may be registered more than once.
    pub fn register(&mut self, handler: Arc<dyn Handler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the first handler that accepts `update`. Never fails.
    #[instrument(skip(self, update), fields(update_id = update.update_id, kind = update.kind.name()))]
    pub async fn dispatch(&self, update: &Update) -> DispatchOutcome {
        for (index, handler) in self.handlers.iter().enumerate() {
            if !handler.can_handle(update) {
                continue;
            }

            let handler_name = handler.name();
            info!(handler = %handler_name, index, "step: handler selected");

            return match handler.handle(update).await {
                Ok(()) => {
                    debug!(handler = %handler_name, "step: handler done");
                    DispatchOutcome::Handled { index }
                }
                Err(e) => {
                    self.error_log.log(&format!(
                        "handler {} failed on update {}: {}",
                        handler_name, update.update_id, e
                    ));
                    DispatchOutcome::Failed { index }
                }
            };
        }

        debug!("no handler accepted update; dropped");
        DispatchOutcome::Unhandled
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
