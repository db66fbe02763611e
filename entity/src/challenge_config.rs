use sea_orm::entity::prelude::*;

/// Per-guild challenge trigger configuration.
///
/// One row per Discord guild. Written wholesale by the `/challengeconfig`
/// command and read on every guild message and every sweep tick.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "challenge_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild ID (snowflake stored as string).
    #[sea_orm(unique)]
    pub guild_id: String,
    /// Discord channel ID where challenges are posted.
    pub channel_id: String,
    pub enabled: bool,
    /// Trigger mode: "messages" or "time".
    pub mode: String,
    /// Message count or seconds, depending on mode.
    pub interval: i64,
    /// Last spawn timestamp; only meaningful in time mode.
    pub last_spawn_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
