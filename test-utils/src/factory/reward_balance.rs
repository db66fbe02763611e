//! Reward balance factory for creating test ledger entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reward balances with customizable fields.
pub struct RewardBalanceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    balance: i64,
    last_daily_at: Option<DateTime<Utc>>,
}

impl<'a> RewardBalanceFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults: unique user ID, balance 0, no daily claim recorded.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            balance: 0,
            last_daily_at: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn last_daily_at(mut self, last_daily_at: DateTime<Utc>) -> Self {
        self.last_daily_at = Some(last_daily_at);
        self
    }

    /// Inserts the configured reward balance into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created reward balance entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reward_balance::Model, DbErr> {
        entity::reward_balance::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            balance: ActiveValue::Set(self.balance),
            last_daily_at: ActiveValue::Set(self.last_daily_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
