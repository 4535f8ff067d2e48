//! botkit CLI: run the bot or register its command list. Config from env and optional CLI args.

use anyhow::Result;
use botkit_cli::{load_config, resolve_allowed_users, run_bot, set_commands, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            allowed_users,
            once,
        } => {
            let config = load_config(token)?;
            let allowed_users = resolve_allowed_users(allowed_users)?;
            run_bot(config, allowed_users, once).await
        }
        Commands::SetCommands { token } => set_commands(load_config(token)?).await,
    }
}
