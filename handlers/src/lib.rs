//! # Handlers for the bot toolkit
//!
//! Stock handlers built on [`botkit_core::predicates`] and the [`botkit_api::BotApi`] facade:
//! `/start` with a vote keyboard, `/help`, `/photo`, vote callbacks, new-member greetings and an
//! allowlist guard. [`build_default_chain`] wires them in their intended order.

mod allowlist;
mod commands;
mod membership;
mod vote;

#[cfg(test)]
mod test;

use std::sync::Arc;

use botkit_api::BotApi;
use botkit_core::ErrorLog;
use handler_chain::HandlerChain;

pub use allowlist::AllowlistGuard;
pub use commands::{default_commands, HelpHandler, PhotoHandler, StartHandler};
pub use membership::WelcomeNewMemberHandler;
pub use vote::{vote_keyboard, VoteCallbackHandler, VOTE_TAG};

/// Guard first (when an allowlist is given), then commands, callbacks and membership changes.
pub fn build_default_chain(
    api: Arc<dyn BotApi>,
    allowed_users: Vec<i64>,
    error_log: Arc<dyn ErrorLog>,
) -> HandlerChain {
    let mut chain = HandlerChain::with_error_log(error_log);
    if !allowed_users.is_empty() {
        chain.register(Arc::new(AllowlistGuard::new(allowed_users)));
    }
    chain
        .add_handler(Arc::new(StartHandler::new(api.clone())))
        .add_handler(Arc::new(HelpHandler::new(api.clone())))
        .add_handler(Arc::new(PhotoHandler::new(api.clone())))
        .add_handler(Arc::new(VoteCallbackHandler::new(api.clone())))
        .add_handler(Arc::new(WelcomeNewMemberHandler::new(api)))
}
