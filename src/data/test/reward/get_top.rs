use super::*;

/// Tests the leaderboard ordering and limit.
///
/// Expected: Ok with the two richest entries, best first
#[tokio::test]
async fn returns_richest_first_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reward_balance::RewardBalanceFactory::new(db)
        .user_id("1")
        .balance(1000)
        .build()
        .await?;
    factory::reward_balance::RewardBalanceFactory::new(db)
        .user_id("2")
        .balance(5000)
        .build()
        .await?;
    factory::reward_balance::RewardBalanceFactory::new(db)
        .user_id("3")
        .balance(2500)
        .build()
        .await?;

    let repo = RewardLedgerRepository::new(db);
    let top = repo.get_top(2).await?;

    let ids: Vec<&str> = top.iter().map(|e| e.user_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert_eq!(top[0].balance, 5000);

    Ok(())
}

/// Tests the leaderboard on an empty ledger.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_for_empty_ledger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RewardBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RewardLedgerRepository::new(db);
    let top = repo.get_top(5).await?;

    assert!(top.is_empty());

    Ok(())
}
