use super::*;

/// Tests creating the house account on first startup.
///
/// Expected: Ok with house balance at zero
#[tokio::test]
async fn creates_house_account_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RewardLedgerRepository::new(db);
    repo.ensure_house_account().await?;

    assert_eq!(repo.get_balance(HOUSE_ACCOUNT_ID).await?, 0);

    Ok(())
}

/// Tests that the bootstrap is idempotent.
///
/// Expected: Ok with a single row after repeated calls
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RewardLedgerRepository::new(db);
    repo.ensure_house_account().await?;
    repo.ensure_house_account().await?;

    let count = entity::prelude::RewardBalance::find()
        .filter(entity::reward_balance::Column::UserId.eq(HOUSE_ACCOUNT_ID.to_string()))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the bootstrap never clobbers an accumulated house balance.
///
/// Verifies that a later startup leaves house winnings untouched.
///
/// Expected: Ok with the accumulated balance preserved
#[tokio::test]
async fn preserves_accumulated_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RewardLedgerRepository::new(db);
    repo.ensure_house_account().await?;
    repo.increment(HOUSE_ACCOUNT_ID, 5000).await?;

    // Simulated restart
    repo.ensure_house_account().await?;

    assert_eq!(repo.get_balance(HOUSE_ACCOUNT_ID).await?, 5000);

    Ok(())
}
