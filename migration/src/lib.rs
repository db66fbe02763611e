pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_challenge_config_table;
mod m20260601_000002_create_reward_balance_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_challenge_config_table::Migration),
            Box::new(m20260601_000002_create_reward_balance_table::Migration),
        ]
    }
}
