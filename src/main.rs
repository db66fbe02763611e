mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::challenge::state::TriggerState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::init_reward_ledger(&db).await?;

    // Ephemeral trigger state, shared between the message handler and the sweep
    let state = Arc::new(TriggerState::new());

    tracing::info!("Starting challengeboard");

    // Initialize Discord bot and extract its HTTP client for the scheduler
    let (client, discord_http) = bot::start::init_bot(&config, db.clone(), state.clone()).await?;

    // Start the 60-second challenge sweep
    scheduler::challenge_sweep::start_scheduler(db, discord_http, state).await?;

    // Run the bot (blocks until shutdown)
    bot::start::start_bot(client).await
}
