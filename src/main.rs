mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config)?;

    tracing::info!(
        "Starting rollcall v{} with roster {}",
        env!("CARGO_PKG_VERSION"),
        config.roster_path.display()
    );

    let state = Arc::new(BotState::new(config));

    let client = bot::start::init_bot(state.clone()).await?;

    // The scheduler shares the bot's HTTP client for listing guild members
    let mut scheduler =
        scheduler::roster_sync::start_scheduler(state.clone(), client.http.clone()).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutdown signal received, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    let result = bot::start::start_bot(client).await;

    scheduler.shutdown().await?;
    tracing::info!("Roster sync scheduler stopped");

    result
}
