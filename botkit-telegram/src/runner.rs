//! Long-poll runner: fetches batches with an advancing cursor and feeds each update to the
//! [`HandlerChain`]. Fetch failures back off and retry; handler failures never stop the loop.

use std::sync::Arc;
use std::time::Duration;

use botkit_api::BotApi;
use botkit_core::{default_error_log, ErrorLog, Result, Update};
use handler_chain::{DispatchOutcome, HandlerChain};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::backoff::Backoff;
use crate::config::TelegramConfig;
use crate::cursor::Cursor;

/// Counts for one processed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    pub received: usize,
    pub handled: usize,
    pub failed: usize,
    pub unhandled: usize,
}

pub struct Poller {
    api: Arc<dyn BotApi>,
    chain: HandlerChain,
    cursor: Cursor,
    poll_timeout_secs: u64,
    backoff: Backoff,
    error_log: Arc<dyn ErrorLog>,
}

/// Resolves once `true` has been sent. Never resolves if the sender is gone without sending it.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Poller {
    pub fn new(api: Arc<dyn BotApi>, chain: HandlerChain, config: &TelegramConfig) -> Self {
        Self {
            api,
            chain,
            cursor: Cursor::default(),
            poll_timeout_secs: config.poll_timeout_secs,
            backoff: Backoff::new(
                Duration::from_secs(config.backoff_initial_secs),
                Duration::from_secs(config.backoff_max_secs),
            ),
            error_log: default_error_log(),
        }
    }

    pub fn with_error_log(mut self, error_log: Arc<dyn ErrorLog>) -> Self {
        self.error_log = error_log;
        self
    }

    /// Resumes from a previously saved offset.
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// One fetch + dispatch + cursor advance. A fetch failure is returned and the cursor is left alone.
    pub async fn poll_once(&mut self) -> Result<PollStats> {
        let updates = self
            .api
            .get_updates(self.cursor.next_offset(), self.poll_timeout_secs)
            .await?;
        Ok(self.process_batch(updates).await)
    }

    /// Polls until `shutdown` carries `true`. Shutdown is honoured while waiting on the long poll
    /// and while backing off; a batch already fetched is always processed to the end.
    #[instrument(skip(self, shutdown))]
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        info!(
            offset = self.cursor.next_offset(),
            timeout_secs = self.poll_timeout_secs,
            "step: poll loop started"
        );

        loop {
            let api = self.api.clone();
            let offset = self.cursor.next_offset();
            let fetched = tokio::select! {
                biased;
                _ = shutdown_requested(&mut shutdown) => break,
                res = api.get_updates(offset, self.poll_timeout_secs) => res,
            };

            match fetched {
                Ok(updates) => {
                    self.backoff.reset();
                    self.process_batch(updates).await;
                }
                Err(e) => {
                    let delay = self.backoff.next_delay();
                    error!(error = %e, offset, retry_in_secs = delay.as_secs(), "getUpdates failed");
                    tokio::select! {
                        biased;
                        _ = shutdown_requested(&mut shutdown) => break,
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
            }
        }

        info!(offset = self.cursor.next_offset(), "step: poll loop stopped");
        Ok(())
    }

    /// Dispatches in ascending `update_id` order, then moves the cursor past the highest id,
    /// whatever the handlers did.
    async fn process_batch(&mut self, mut updates: Vec<Update>) -> PollStats {
        let mut stats = PollStats {
            received: updates.len(),
            ..PollStats::default()
        };
        if updates.is_empty() {
            return stats;
        }

        updates.sort_by_key(|u| u.update_id);
        let highest = updates.last().map(|u| u.update_id);

        for update in updates {
            let update_id = update.update_id;
            debug!(update_id, kind = update.kind.name(), "step: dispatching update");

            // Own task per update so a panicking handler is contained like a failing one.
            let chain = self.chain.clone();
            match tokio::spawn(async move { chain.dispatch(&update).await }).await {
                Ok(DispatchOutcome::Handled { .. }) => stats.handled += 1,
                Ok(DispatchOutcome::Failed { .. }) => stats.failed += 1,
                Ok(DispatchOutcome::Unhandled) => stats.unhandled += 1,
                Err(join_error) => {
                    stats.failed += 1;
                    self.error_log.log(&format!(
                        "handler task for update {} aborted: {}",
                        update_id, join_error
                    ));
                }
            }
        }

        if let Some(highest) = highest {
            if !self.cursor.advance_past(highest) {
                warn!(highest, offset = self.cursor.next_offset(), "batch older than cursor");
            }
        }

        info!(
            received = stats.received,
            handled = stats.handled,
            failed = stats.failed,
            unhandled = stats.unhandled,
            offset = self.cursor.next_offset(),
            "step: batch processed"
        );
        stats
    }
}
