//! Domain models for the reward ledger.

/// One ledger row as shown on the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Discord user ID (stored as String); the house account is `"0"`.
    pub user_id: String,
    pub balance: i64,
}

impl LedgerEntry {
    pub fn from_entity(entity: entity::reward_balance::Model) -> Self {
        Self {
            user_id: entity.user_id,
            balance: entity.balance,
        }
    }
}

/// Outcome of a daily-credit claim attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DailyClaim {
    /// The credit was applied; carries the balance after the claim.
    Credited { balance: i64 },
    /// The user already collected a daily credit today.
    AlreadyClaimed,
}
