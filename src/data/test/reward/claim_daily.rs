use super::*;

use chrono::{Duration, Utc};

use crate::model::reward::DailyClaim;

/// Tests a first-ever daily claim.
///
/// Expected: Ok(Credited) with the amount as the balance and the claim
/// timestamp stored
#[tokio::test]
async fn first_claim_credits_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = RewardLedgerRepository::new(db);
    let claim = repo.claim_daily(42, 1500, now).await?;

    assert_eq!(claim, DailyClaim::Credited { balance: 1500 });

    let model = entity::prelude::RewardBalance::find()
        .filter(entity::reward_balance::Column::UserId.eq("42"))
        .one(db)
        .await?
        .unwrap();
    assert!(model.last_daily_at.is_some());

    Ok(())
}

/// Tests a repeat claim on the same day.
///
/// Expected: Ok(AlreadyClaimed) with the balance unchanged
#[tokio::test]
async fn same_day_claim_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = RewardLedgerRepository::new(db);
    repo.claim_daily(42, 1500, now).await?;

    let claim = repo.claim_daily(42, 2000, now).await?;

    assert_eq!(claim, DailyClaim::AlreadyClaimed);
    assert_eq!(repo.get_balance(42).await?, 1500);

    Ok(())
}

/// Tests a claim on the day after the last one.
///
/// Expected: Ok(Credited) with both amounts accumulated
#[tokio::test]
async fn next_day_claim_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let yesterday = Utc::now() - Duration::days(1);
    factory::reward_balance::RewardBalanceFactory::new(db)
        .user_id("42")
        .balance(1500)
        .last_daily_at(yesterday)
        .build()
        .await?;

    let repo = RewardLedgerRepository::new(db);
    let claim = repo.claim_daily(42, 2000, Utc::now()).await?;

    assert_eq!(claim, DailyClaim::Credited { balance: 3500 });

    Ok(())
}

/// Tests a claim by a user who has a balance but never claimed.
///
/// Verifies that challenge winnings alone do not block the first daily.
///
/// Expected: Ok(Credited) on top of the existing balance
#[tokio::test]
async fn claim_allowed_with_prior_winnings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reward_balance::RewardBalanceFactory::new(db)
        .user_id("42")
        .balance(2500)
        .build()
        .await?;

    let repo = RewardLedgerRepository::new(db);
    let claim = repo.claim_daily(42, 1000, Utc::now()).await?;

    assert_eq!(claim, DailyClaim::Credited { balance: 3500 });

    Ok(())
}
