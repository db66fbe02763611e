use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::challenge::{ChallengeConfig, UpsertChallengeConfigParam};

pub struct ChallengeConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChallengeConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the challenge configuration for a guild
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(ChallengeConfig))`: Configuration found
    /// - `Ok(None)`: Guild has never been configured
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<ChallengeConfig>, DbErr> {
        let model = entity::prelude::ChallengeConfig::find()
            .filter(entity::challenge_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        Ok(model.map(ChallengeConfig::from_entity))
    }

    /// Creates or replaces a guild's challenge configuration wholesale
    ///
    /// All configurable fields are overwritten, and `last_spawn_at` restarts at
    /// the configuration time so a freshly enabled time-mode guild waits a full
    /// interval before its first spawn.
    ///
    /// # Arguments
    /// - `param`: The new configuration values
    ///
    /// # Returns
    /// - `Ok(ChallengeConfig)`: The stored configuration
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(&self, param: UpsertChallengeConfigParam) -> Result<ChallengeConfig, DbErr> {
        let model = entity::prelude::ChallengeConfig::insert(entity::challenge_config::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            enabled: ActiveValue::Set(param.enabled),
            mode: ActiveValue::Set(param.mode.to_string()),
            interval: ActiveValue::Set(param.interval),
            last_spawn_at: ActiveValue::Set(param.configured_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::challenge_config::Column::GuildId)
                .update_columns([
                    entity::challenge_config::Column::ChannelId,
                    entity::challenge_config::Column::Enabled,
                    entity::challenge_config::Column::Mode,
                    entity::challenge_config::Column::Interval,
                    entity::challenge_config::Column::LastSpawnAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ChallengeConfig::from_entity(model))
    }

    /// Gets all enabled challenge configurations
    ///
    /// Used by the periodic sweep; mode filtering happens in the engine.
    ///
    /// # Returns
    /// - `Ok(Vec<ChallengeConfig>)`: All configurations with `enabled = true`
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_enabled(&self) -> Result<Vec<ChallengeConfig>, DbErr> {
        let models = entity::prelude::ChallengeConfig::find()
            .filter(entity::challenge_config::Column::Enabled.eq(true))
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(ChallengeConfig::from_entity).collect())
    }

    /// Updates a guild's last spawn timestamp
    ///
    /// Called by the sweep after a time-mode trigger fires, with the tick time
    /// (not the original deadline).
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    /// - `at`: The new last spawn timestamp
    ///
    /// # Returns
    /// - `Ok(())`: Timestamp updated (no-op when the guild has no config)
    /// - `Err(DbErr)`: Database error
    pub async fn update_last_spawn(&self, guild_id: u64, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::ChallengeConfig::update_many()
            .col_expr(entity::challenge_config::Column::LastSpawnAt, Expr::value(at))
            .filter(entity::challenge_config::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
