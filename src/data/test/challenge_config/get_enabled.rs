use super::*;

/// Tests that only enabled configurations are returned.
///
/// Expected: Ok with disabled guilds filtered out
#[tokio::test]
async fn returns_only_enabled_configs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChallengeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::challenge_config::ChallengeConfigFactory::new(db)
        .guild_id("111")
        .enabled(true)
        .build()
        .await?;
    factory::challenge_config::ChallengeConfigFactory::new(db)
        .guild_id("222")
        .enabled(false)
        .build()
        .await?;
    factory::challenge_config::ChallengeConfigFactory::new(db)
        .guild_id("333")
        .enabled(true)
        .build()
        .await?;

    let repo = ChallengeConfigRepository::new(db);
    let configs = repo.get_enabled().await?;

    let mut guild_ids: Vec<String> = configs.into_iter().map(|c| c.guild_id).collect();
    guild_ids.sort();
    assert_eq!(guild_ids, vec!["111", "333"]);

    Ok(())
}

/// Tests listing when nothing is configured.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_configs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChallengeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChallengeConfigRepository::new(db);
    let configs = repo.get_enabled().await?;

    assert!(configs.is_empty());

    Ok(())
}

/// Tests that mode filtering is left to the caller.
///
/// The sweep filters by mode itself; the repository returns enabled configs
/// of both modes.
///
/// Expected: Ok with both modes present
#[tokio::test]
async fn returns_both_modes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChallengeConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::challenge_config::ChallengeConfigFactory::new(db)
        .guild_id("111")
        .mode("messages")
        .build()
        .await?;
    factory::challenge_config::ChallengeConfigFactory::new(db)
        .guild_id("222")
        .mode("time")
        .build()
        .await?;

    let repo = ChallengeConfigRepository::new(db);
    let configs = repo.get_enabled().await?;

    assert_eq!(configs.len(), 2);
    assert!(configs.iter().any(|c| c.mode == TriggerMode::Messages));
    assert!(configs.iter().any(|c| c.mode == TriggerMode::Time));

    Ok(())
}
