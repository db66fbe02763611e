use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::handler::Handler, config::Config, error::AppError,
    service::challenge::state::TriggerState,
};

/// Builds the Discord client and extracts its HTTP handle
///
/// The HTTP handle is shared with the sweep scheduler so timed challenges can
/// be posted outside of gateway event handling.
///
/// # Arguments
/// - `config` - Application configuration with the bot token
/// - `db` - Database connection for the event handlers
/// - `state` - Shared ephemeral trigger state
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Initialized client and its HTTP handle
/// - `Err(AppError)` - Client initialization failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    state: Arc<TriggerState>,
) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the Discord
    // Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, state);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// Blocks until the gateway connection shuts down, so call it last from main
/// (or from a dedicated task).
///
/// # Arguments
/// - `client` - Client produced by [`init_bot`]
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
