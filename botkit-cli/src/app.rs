//! Wires config, transport, client, handler chain and poller together.

use std::sync::Arc;

use anyhow::Result;
use botkit_api::{mask_token, BotApi, ReqwestTransport, TelegramClient};
use botkit_core::{default_error_log, init_tracing};
use botkit_telegram::{Poller, TelegramConfig};
use handlers::{build_default_chain, default_commands};
use tokio::sync::watch;
use tracing::{error, info, warn};

fn build_api(config: &TelegramConfig) -> Result<Arc<dyn BotApi>> {
    let transport = Arc::new(ReqwestTransport::new(config.request_timeout())?);
    let client = TelegramClient::new(config.bot_token.clone(), transport)
        .with_api_url(config.api_url())
        .with_error_log(default_error_log());
    Ok(Arc::new(client))
}

/// Registers the default command list. Failure is logged, never fatal.
async fn register_commands(api: &dyn BotApi) {
    match api.set_my_commands(&default_commands()).await {
        Ok(()) => info!("Command list registered"),
        Err(e) => warn!(error = %e, "Failed to register command list"),
    }
}

/// Runs the bot until Ctrl-C, or for a single batch when `once` is set.
pub async fn run_bot(config: TelegramConfig, allowed_users: Vec<i64>, once: bool) -> Result<()> {
    init_tracing(&config.log_file)?;
    info!(
        token = %mask_token(&config.bot_token),
        api_url = %config.api_url(),
        poll_timeout_secs = config.poll_timeout_secs,
        allowlist = allowed_users.len(),
        "Starting bot"
    );

    let api = build_api(&config)?;
    register_commands(api.as_ref()).await;

    let chain = build_default_chain(api.clone(), allowed_users, default_error_log());
    let mut poller = Poller::new(api, chain, &config);

    if once {
        let stats = poller.poll_once().await?;
        info!(?stats, "Single poll finished");
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown requested"),
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C; shutting down"),
        }
        let _ = shutdown_tx.send(true);
    });

    poller.run(shutdown_rx).await?;
    info!(next_offset = poller.cursor().next_offset(), "Bot stopped");
    Ok(())
}

/// Registers the command list and reports the outcome.
pub async fn set_commands(config: TelegramConfig) -> Result<()> {
    init_tracing(&config.log_file)?;
    let api = build_api(&config)?;
    api.set_my_commands(&default_commands()).await?;
    info!("Command list registered");
    Ok(())
}
