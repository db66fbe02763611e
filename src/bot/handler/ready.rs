//! Ready event handler for bot initialization.
//!
//! Fires when the bot completes the initial gateway handshake. Used to log
//! connection information and register the global slash commands.

use serenity::all::{
    Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, Permissions, Ready,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the `/challengeconfig` and `/balance` global commands. Command
/// registration is idempotent on Discord's side, so reconnects are harmless.
///
/// # Arguments
/// - `ctx` - Discord context for HTTP access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = vec![
        CreateCommand::new("challengeconfig")
            .description("Configure automatic challenges for this server")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Channel where challenges will be posted",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "enabled",
                    "Enable or disable challenges",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "mode",
                    "Trigger mode (messages/time)",
                )
                .required(true)
                .add_string_choice("messages", "messages")
                .add_string_choice("time", "time"),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "interval",
                    "Trigger interval (message count or seconds)",
                )
                .required(true)
                .min_int_value(1),
            ),
        CreateCommand::new("balance")
            .description("Check a reward balance")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "User to check (defaults to you)",
                )
                .required(false),
            ),
        CreateCommand::new("daily").description("Collect your daily points"),
        CreateCommand::new("rankcoins").description("Top 5 richest balances"),
    ];

    if let Err(e) = Command::set_global_commands(&ctx.http, commands).await {
        tracing::error!("Failed to register global commands: {:?}", e);
    }
}
