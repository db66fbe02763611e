//! Discord bot integration for the challenge engine.
//!
//! This module provides the Discord-facing surface of the application: the
//! gateway client, the event handlers that feed guild messages into the
//! trigger engine, and the slash commands used to configure challenges and
//! check balances.
//!
//! The bot's HTTP client is shared with the sweep scheduler so timed
//! challenges can be posted without maintaining a second connection to
//! Discord.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild availability
//! - `GUILD_MESSAGES` - Receive message events in guilds
//! - `MESSAGE_CONTENT` - Read message text for counting and answer matching
//!   (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
