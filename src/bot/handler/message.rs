use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    model::challenge::MessageEvent,
    service::challenge::{notifier::DiscordNotifier, state::TriggerState, ChallengeEngine},
};

/// Handle message creation in a channel
///
/// Converts the gateway payload into a [`MessageEvent`] and feeds it to the
/// trigger engine. Errors are logged and never propagated back to serenity —
/// one bad message must not take down event processing.
pub async fn handle_message(
    db: &DatabaseConnection,
    state: &TriggerState,
    ctx: Context,
    message: Message,
) {
    // Only guild messages participate (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let event = MessageEvent {
        guild_id: guild_id.get(),
        channel_id: message.channel_id.get(),
        author_id: message.author.id.get(),
        author_is_bot: message.author.bot,
        content: message.content,
    };

    let notifier = DiscordNotifier::new(ctx.http.clone());
    let engine = ChallengeEngine::new(db, state, &notifier);

    if let Err(e) = engine.handle_message(&event).await {
        tracing::error!(
            "Failed to process message in guild {}: {}",
            event.guild_id,
            e
        );
    }
}
