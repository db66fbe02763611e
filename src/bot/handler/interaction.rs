//! Slash command handlers.
//!
//! `/challengeconfig` writes a guild's trigger configuration wholesale; the
//! economy commands (`/balance`, `/daily`, `/rankcoins`) read and write the
//! reward ledger. Validation failures are reported to the invoking user as
//! ephemeral messages and change no state.

use chrono::Utc;
use rand::Rng;
use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction, ResolvedValue,
};

use crate::{
    data::{
        challenge_config::ChallengeConfigRepository,
        reward::{RewardLedgerRepository, HOUSE_ACCOUNT_ID},
    },
    model::challenge::{TriggerMode, UpsertChallengeConfigParam},
    model::reward::DailyClaim,
};

/// Inclusive range the daily credit is drawn from.
const DAILY_CREDIT_MIN: i64 = 1000;
const DAILY_CREDIT_MAX: i64 = 3000;

/// Number of entries shown by `/rankcoins`.
const LEADERBOARD_SIZE: u64 = 5;

/// Dispatches an interaction to the matching command handler
pub async fn handle_interaction(db: &DatabaseConnection, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    match command.data.name.as_str() {
        "challengeconfig" => challenge_config(db, &ctx, &command).await,
        "balance" => balance(db, &ctx, &command).await,
        "daily" => daily(db, &ctx, &command).await,
        "rankcoins" => rank_coins(db, &ctx, &command).await,
        name => tracing::warn!("Received unknown command /{}", name),
    }
}

/// Handles `/challengeconfig channel enabled mode interval`
async fn challenge_config(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    let Some(guild_id) = command.guild_id else {
        respond(ctx, command, "❌ This command only works in a server", true).await;
        return;
    };

    let mut channel_id = None;
    let mut enabled = None;
    let mut mode_raw = None;
    let mut interval = None;

    for option in command.data.options() {
        match (option.name, option.value) {
            ("channel", ResolvedValue::Channel(channel)) => channel_id = Some(channel.id.get()),
            ("enabled", ResolvedValue::Boolean(value)) => enabled = Some(value),
            ("mode", ResolvedValue::String(value)) => mode_raw = Some(value.to_string()),
            ("interval", ResolvedValue::Integer(value)) => interval = Some(value),
            _ => {}
        }
    }

    let (Some(channel_id), Some(enabled), Some(mode_raw), Some(interval)) =
        (channel_id, enabled, mode_raw, interval)
    else {
        respond(ctx, command, "❌ Missing required options", true).await;
        return;
    };

    // Discord enforces the choices, but the value is still free text on the wire
    let Ok(mode) = mode_raw.parse::<TriggerMode>() else {
        respond(
            ctx,
            command,
            "❌ Invalid mode! Use `messages` or `time`",
            true,
        )
        .await;
        return;
    };

    if interval <= 0 {
        respond(ctx, command, "❌ Interval must be a positive number", true).await;
        return;
    }

    let repo = ChallengeConfigRepository::new(db);
    let param = UpsertChallengeConfigParam {
        guild_id: guild_id.get(),
        channel_id,
        enabled,
        mode,
        interval,
        configured_at: Utc::now(),
    };

    match repo.upsert(param).await {
        Ok(config) => {
            let summary = format!(
                "Configuration updated!\n\
                 🔹 Channel: <#{}>\n\
                 🔹 Enabled: {}\n\
                 🔹 Mode: {}\n\
                 🔹 Interval: {}",
                channel_id, config.enabled, config.mode, config.interval
            );
            respond(ctx, command, &summary, true).await;
        }
        Err(e) => {
            tracing::error!(
                "Failed to upsert challenge config for guild {}: {}",
                guild_id,
                e
            );
            respond(ctx, command, "❌ Failed to save configuration", true).await;
        }
    }
}

/// Handles `/balance [user]`
///
/// Bot targets map to the reserved house account, matching how house winnings
/// are tracked in the same keyspace as player balances.
async fn balance(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    let mut target = &command.user;

    for option in command.data.options() {
        if let ("user", ResolvedValue::User(user, _)) = (option.name, option.value) {
            target = user;
        }
    }

    let user_id = if target.bot {
        HOUSE_ACCOUNT_ID
    } else {
        target.id.get()
    };

    let repo = RewardLedgerRepository::new(db);
    let balance = match repo.get_balance(user_id).await {
        Ok(balance) => balance,
        Err(e) => {
            tracing::error!("Failed to read balance for user {}: {}", user_id, e);
            respond(ctx, command, "❌ Failed to read balance", true).await;
            return;
        }
    };
    let rank = match repo.get_rank(user_id).await {
        Ok(rank) => rank,
        Err(e) => {
            tracing::error!("Failed to read rank for user {}: {}", user_id, e);
            respond(ctx, command, "❌ Failed to read balance", true).await;
            return;
        }
    };

    let text = format!(
        "💳 **{}'s balance:** {} points\n🏆 **Global rank:** #{}",
        target.display_name(),
        balance,
        rank
    );
    respond(ctx, command, &text, false).await;
}

/// Handles `/daily`
///
/// Credits a random amount once per UTC day; a repeat claim on the same day
/// is rejected without touching the ledger.
async fn daily(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    let amount = rand::rng().random_range(DAILY_CREDIT_MIN..=DAILY_CREDIT_MAX);

    let repo = RewardLedgerRepository::new(db);
    match repo.claim_daily(command.user.id.get(), amount, Utc::now()).await {
        Ok(DailyClaim::Credited { .. }) => {
            let text = format!("🪙 You collected **{} points** from your daily!", amount);
            respond(ctx, command, &text, false).await;
        }
        Ok(DailyClaim::AlreadyClaimed) => {
            respond(ctx, command, "❌ You already claimed your daily today!", true).await;
        }
        Err(e) => {
            tracing::error!(
                "Failed to claim daily for user {}: {}",
                command.user.id.get(),
                e
            );
            respond(ctx, command, "❌ Failed to claim daily", true).await;
        }
    }
}

/// Handles `/rankcoins`
///
/// Shows the richest balances as an embed. Entries are rendered as mentions
/// so Discord resolves display names client-side; the house account gets a
/// fixed label.
async fn rank_coins(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    let repo = RewardLedgerRepository::new(db);
    let entries = match repo.get_top(LEADERBOARD_SIZE).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failed to read leaderboard: {}", e);
            respond(ctx, command, "❌ Failed to read leaderboard", true).await;
            return;
        }
    };

    if entries.is_empty() {
        respond(ctx, command, "No economy data yet 😢", false).await;
        return;
    }

    let mut description = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let position = index + 1;
        let medal = match position {
            1 => "🥇 ",
            2 => "🥈 ",
            3 => "🥉 ",
            _ => "",
        };
        let name = if entry.user_id == HOUSE_ACCOUNT_ID.to_string() {
            "House".to_string()
        } else {
            format!("<@{}>", entry.user_id)
        };
        description.push_str(&format!(
            "**{}. {}{}** ➜ {} points\n",
            position, medal, name, entry.balance
        ));
    }

    let embed = CreateEmbed::new()
        .title("🏆 Global Points Leaderboard")
        .description(description)
        .colour(Colour::GOLD);

    let message = CreateInteractionResponseMessage::new().embed(embed);
    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
    }
}

/// Sends a plain-text interaction response, logging any delivery failure
async fn respond(ctx: &Context, command: &CommandInteraction, content: &str, ephemeral: bool) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(ephemeral);

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
    }
}
