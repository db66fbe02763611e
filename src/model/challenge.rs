//! Domain models for challenge configuration and message events.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fallback trigger mode when a stored value is missing or unparseable.
pub const DEFAULT_MODE: TriggerMode = TriggerMode::Messages;

/// Fallback trigger interval when a stored value is not positive.
pub const DEFAULT_INTERVAL: i64 = 100;

/// Condition class that determines when a challenge spawns in a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Spawn after every N qualifying messages.
    #[default]
    Messages,
    /// Spawn once N seconds have elapsed since the last spawn.
    Time,
}

/// Error returned when parsing an unrecognized trigger mode value.
#[derive(Debug, Error)]
#[error("Invalid trigger mode '{0}', expected 'messages' or 'time'")]
pub struct ParseTriggerModeError(pub String);

impl FromStr for TriggerMode {
    type Err = ParseTriggerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "messages" => Ok(TriggerMode::Messages),
            "time" => Ok(TriggerMode::Time),
            other => Err(ParseTriggerModeError(other.to_string())),
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerMode::Messages => write!(f, "messages"),
            TriggerMode::Time => write!(f, "time"),
        }
    }
}

/// Per-guild challenge trigger configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeConfig {
    /// Discord guild ID (stored as String).
    pub guild_id: String,
    /// Discord channel ID where challenges are posted (stored as String).
    pub channel_id: String,
    /// Whether challenges are active in this guild.
    pub enabled: bool,
    /// Trigger condition class.
    pub mode: TriggerMode,
    /// Message count or seconds, depending on mode. Always positive.
    pub interval: i64,
    /// Timestamp of the last spawn; only meaningful in time mode.
    pub last_spawn_at: DateTime<Utc>,
}

impl ChallengeConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Unparseable stored modes and non-positive intervals fall back to the
    /// documented defaults rather than failing the read.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `ChallengeConfig` - The converted domain model
    pub fn from_entity(entity: entity::challenge_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            enabled: entity.enabled,
            mode: entity.mode.parse().unwrap_or(DEFAULT_MODE),
            interval: if entity.interval > 0 {
                entity.interval
            } else {
                DEFAULT_INTERVAL
            },
            last_spawn_at: entity.last_spawn_at,
        }
    }
}

/// Parameters for creating or replacing a guild's challenge configuration.
#[derive(Debug, Clone)]
pub struct UpsertChallengeConfigParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub enabled: bool,
    pub mode: TriggerMode,
    pub interval: i64,
    /// Time the configuration was issued; becomes the new `last_spawn_at`.
    pub configured_at: DateTime<Utc>,
}

/// A guild message as seen by the trigger engine.
///
/// Decoupled from the Discord gateway payload so the engine can be driven
/// directly in tests.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    pub guild_id: u64,
    /// Channel the message arrived in; confirmations are posted here.
    pub channel_id: u64,
    pub author_id: u64,
    pub author_is_bot: bool,
    pub content: String,
}
