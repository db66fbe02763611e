//! Challenge config factory for creating test configuration entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test challenge configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::challenge_config::ChallengeConfigFactory;
///
/// let config = ChallengeConfigFactory::new(&db)
///     .guild_id("123456789")
///     .mode("time")
///     .interval(60)
///     .build()
///     .await?;
/// ```
pub struct ChallengeConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    enabled: bool,
    mode: String,
    interval: i64,
    last_spawn_at: DateTime<Utc>,
}

impl<'a> ChallengeConfigFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults: unique guild and channel IDs, enabled, messages mode,
    /// interval 100, last spawn at the current time.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            enabled: true,
            mode: "messages".to_string(),
            interval: 100,
            last_spawn_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    pub fn last_spawn_at(mut self, last_spawn_at: DateTime<Utc>) -> Self {
        self.last_spawn_at = last_spawn_at;
        self
    }

    /// Inserts the configured challenge config into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created challenge config entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::challenge_config::Model, DbErr> {
        entity::challenge_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            enabled: ActiveValue::Set(self.enabled),
            mode: ActiveValue::Set(self.mode),
            interval: ActiveValue::Set(self.interval),
            last_spawn_at: ActiveValue::Set(self.last_spawn_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
