use sea_orm::entity::prelude::*;

/// Per-user reward balance accumulator.
///
/// Mutated only through atomic increments. The reserved house account
/// (`user_id = "0"`) is created once at startup.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reward_balance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord user ID (snowflake stored as string).
    #[sea_orm(unique)]
    pub user_id: String,
    pub balance: i64,
    /// When the user last collected the daily credit; never set for the
    /// house account.
    pub last_daily_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
