//! Channel posting seam between the trigger engine and Discord.
//!
//! The engine only needs "does this channel exist in this guild" and "post this
//! text"; putting those behind a trait keeps the engine testable without a
//! gateway connection.

use serenity::all::ChannelId;
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::error::AppError;

/// Abstract "post to channel" capability consumed by the engine.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Whether the channel exists and belongs to the given guild.
    ///
    /// The engine checks this before a spawn; an unresolvable channel means
    /// the spawn is silently skipped.
    async fn resolve_channel(&self, guild_id: u64, channel_id: u64) -> bool;

    /// Posts a text message to the channel.
    async fn post(&self, channel_id: u64, text: String) -> Result<(), AppError>;
}

/// Notifier backed by the Discord HTTP API.
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn resolve_channel(&self, guild_id: u64, channel_id: u64) -> bool {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(channel) => channel
                .guild()
                .map(|c| c.guild_id.get() == guild_id)
                .unwrap_or(false),
            Err(e) => {
                tracing::debug!(
                    "Could not resolve channel {} in guild {}: {}",
                    channel_id,
                    guild_id,
                    e
                );
                false
            }
        }
    }

    async fn post(&self, channel_id: u64, text: String) -> Result<(), AppError> {
        ChannelId::new(channel_id).say(&self.http, text).await?;

        Ok(())
    }
}
