use super::*;

/// Tests incrementing a user with no existing ledger entry.
///
/// Verifies the upsert semantics: an absent user starts at zero and the
/// amount is added in one statement.
///
/// Expected: Ok with balance equal to the amount
#[tokio::test]
async fn creates_entry_at_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RewardLedgerRepository::new(db);
    let balance = repo.increment(123456789, 2500).await?;

    assert_eq!(balance, 2500);

    // Verify the row exists
    let count = entity::prelude::RewardBalance::find()
        .filter(entity::reward_balance::Column::UserId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that repeated increments accumulate.
///
/// Verifies the additive, monotonic property: each increment adds exactly the
/// amount to the existing balance.
///
/// Expected: Ok with balances 2500, 5000, 7500
#[tokio::test]
async fn accumulates_across_increments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RewardLedgerRepository::new(db);

    assert_eq!(repo.increment(42, 2500).await?, 2500);
    assert_eq!(repo.increment(42, 2500).await?, 5000);
    assert_eq!(repo.increment(42, 2500).await?, 7500);

    // Still a single row
    let count = entity::prelude::RewardBalance::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that increments for different users are independent.
///
/// Expected: Ok with separate balances per user
#[tokio::test]
async fn users_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RewardLedgerRepository::new(db);
    repo.increment(1, 100).await?;
    repo.increment(2, 200).await?;
    repo.increment(1, 100).await?;

    assert_eq!(repo.get_balance(1).await?, 200);
    assert_eq!(repo.get_balance(2).await?, 200);

    Ok(())
}

/// Tests incrementing on top of a pre-existing balance.
///
/// Expected: Ok with the amount added to the stored balance
#[tokio::test]
async fn adds_to_existing_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reward_balance::RewardBalanceFactory::new(db)
        .user_id("77")
        .balance(1000)
        .build()
        .await?;

    let repo = RewardLedgerRepository::new(db);
    let balance = repo.increment(77, 2500).await?;

    assert_eq!(balance, 3500);

    Ok(())
}
