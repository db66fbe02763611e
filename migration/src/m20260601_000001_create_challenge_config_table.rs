use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChallengeConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(ChallengeConfig::Id))
                    .col(string_uniq(ChallengeConfig::GuildId))
                    .col(string(ChallengeConfig::ChannelId))
                    .col(boolean(ChallengeConfig::Enabled))
                    .col(string(ChallengeConfig::Mode))
                    .col(big_integer(ChallengeConfig::Interval))
                    .col(timestamp_with_time_zone(ChallengeConfig::LastSpawnAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChallengeConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ChallengeConfig {
    Table,
    Id,
    GuildId,
    ChannelId,
    Enabled,
    Mode,
    Interval,
    LastSpawnAt,
}
