use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RewardBalance::Table)
                    .if_not_exists()
                    .col(pk_auto(RewardBalance::Id))
                    .col(string_uniq(RewardBalance::UserId))
                    .col(big_integer(RewardBalance::Balance))
                    .col(timestamp_with_time_zone_null(RewardBalance::LastDailyAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RewardBalance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum RewardBalance {
    Table,
    Id,
    UserId,
    Balance,
    LastDailyAt,
}
