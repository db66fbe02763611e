use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::reward::{DailyClaim, LedgerEntry};

/// Reserved ledger identity for the non-player house balance.
pub const HOUSE_ACCOUNT_ID: u64 = 0;

pub struct RewardLedgerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RewardLedgerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Atomically adds to a user's reward balance
    ///
    /// Upsert semantics: an absent user starts at zero and the amount is added,
    /// all in a single statement so concurrent increments never lose updates.
    ///
    /// # Arguments
    /// - `user_id`: Discord's unique identifier for the user (u64)
    /// - `amount`: Units to add to the balance
    ///
    /// # Returns
    /// - `Ok(i64)`: The balance after the increment
    /// - `Err(DbErr)`: Database error
    pub async fn increment(&self, user_id: u64, amount: i64) -> Result<i64, DbErr> {
        let model = entity::prelude::RewardBalance::insert(entity::reward_balance::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            balance: ActiveValue::Set(amount),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::reward_balance::Column::UserId)
                .value(
                    entity::reward_balance::Column::Balance,
                    Expr::col(entity::reward_balance::Column::Balance).add(amount),
                )
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(model.balance)
    }

    /// Gets a user's reward balance
    ///
    /// # Arguments
    /// - `user_id`: Discord's unique identifier for the user (u64)
    ///
    /// # Returns
    /// - `Ok(i64)`: The balance, 0 when the user has no ledger entry
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_balance(&self, user_id: u64) -> Result<i64, DbErr> {
        let model = entity::prelude::RewardBalance::find()
            .filter(entity::reward_balance::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        Ok(model.map(|m| m.balance).unwrap_or(0))
    }

    /// Claims the once-per-day credit for a user
    ///
    /// A claim is allowed when the user has never claimed or the last claim
    /// falls on an earlier UTC calendar day. The credit and the claim
    /// timestamp are written in one upsert.
    ///
    /// # Arguments
    /// - `user_id`: Discord's unique identifier for the user (u64)
    /// - `amount`: Units to credit for this claim
    /// - `now`: The claim time
    ///
    /// # Returns
    /// - `Ok(DailyClaim::Credited)`: Credit applied, with the new balance
    /// - `Ok(DailyClaim::AlreadyClaimed)`: A claim already exists for today
    /// - `Err(DbErr)`: Database error
    pub async fn claim_daily(
        &self,
        user_id: u64,
        amount: i64,
        now: DateTime<Utc>,
    ) -> Result<DailyClaim, DbErr> {
        let existing = entity::prelude::RewardBalance::find()
            .filter(entity::reward_balance::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        if let Some(last_daily_at) = existing.and_then(|m| m.last_daily_at) {
            if last_daily_at.date_naive() == now.date_naive() {
                return Ok(DailyClaim::AlreadyClaimed);
            }
        }

        let model = entity::prelude::RewardBalance::insert(entity::reward_balance::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            balance: ActiveValue::Set(amount),
            last_daily_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::reward_balance::Column::UserId)
                .value(
                    entity::reward_balance::Column::Balance,
                    Expr::col(entity::reward_balance::Column::Balance).add(amount),
                )
                .value(entity::reward_balance::Column::LastDailyAt, Expr::value(now))
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(DailyClaim::Credited {
            balance: model.balance,
        })
    }

    /// Gets a user's global rank by balance
    ///
    /// Rank is one plus the number of strictly richer ledger entries, so tied
    /// balances share a rank. A user with no entry ranks as if their balance
    /// were 0.
    ///
    /// # Arguments
    /// - `user_id`: Discord's unique identifier for the user (u64)
    ///
    /// # Returns
    /// - `Ok(u64)`: The 1-based global rank
    /// - `Err(DbErr)`: Database error
    pub async fn get_rank(&self, user_id: u64) -> Result<u64, DbErr> {
        let balance = self.get_balance(user_id).await?;

        let richer = entity::prelude::RewardBalance::find()
            .filter(entity::reward_balance::Column::Balance.gt(balance))
            .count(self.db)
            .await?;

        Ok(richer + 1)
    }

    /// Gets the richest ledger entries, best first
    ///
    /// # Arguments
    /// - `limit`: Maximum number of entries to return
    ///
    /// # Returns
    /// - `Ok(Vec<LedgerEntry>)`: Entries ordered by balance descending
    /// - `Err(DbErr)`: Database error
    pub async fn get_top(&self, limit: u64) -> Result<Vec<LedgerEntry>, DbErr> {
        let models = entity::prelude::RewardBalance::find()
            .order_by_desc(entity::reward_balance::Column::Balance)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(LedgerEntry::from_entity).collect())
    }

    /// Creates the reserved house account at zero if it does not exist
    ///
    /// Idempotent: an existing house balance is left untouched.
    ///
    /// # Returns
    /// - `Ok(())`: House account present
    /// - `Err(DbErr)`: Database error
    pub async fn ensure_house_account(&self) -> Result<(), DbErr> {
        entity::prelude::RewardBalance::insert(entity::reward_balance::ActiveModel {
            user_id: ActiveValue::Set(HOUSE_ACCOUNT_ID.to_string()),
            balance: ActiveValue::Set(0),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::reward_balance::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
