use super::*;

/// Tests updating the last spawn timestamp for one guild.
///
/// Expected: Ok with the target guild updated and other guilds untouched
#[tokio::test]
async fn updates_only_target_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChallengeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale = Utc::now() - Duration::hours(3);
    factory::challenge_config::ChallengeConfigFactory::new(db)
        .guild_id("111")
        .last_spawn_at(stale)
        .build()
        .await?;
    factory::challenge_config::ChallengeConfigFactory::new(db)
        .guild_id("222")
        .last_spawn_at(stale)
        .build()
        .await?;

    let now = Utc::now();
    let repo = ChallengeConfigRepository::new(db);
    repo.update_last_spawn(111, now).await?;

    let updated = repo.find_by_guild_id(111).await?.unwrap();
    let untouched = repo.find_by_guild_id(222).await?.unwrap();

    assert!((updated.last_spawn_at - now).num_seconds().abs() < 2);
    assert!((untouched.last_spawn_at - stale).num_seconds().abs() < 2);

    Ok(())
}

/// Tests updating a guild with no configuration.
///
/// Expected: Ok as a no-op
#[tokio::test]
async fn no_op_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChallengeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChallengeConfigRepository::new(db);
    repo.update_last_spawn(999, Utc::now()).await?;

    Ok(())
}
