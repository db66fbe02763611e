use crate::{config::Config, data::reward::RewardLedgerRepository, error::AppError};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date before the
/// bot starts processing events.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Initializes the reward ledger's reserved house account.
///
/// Idempotent: creates the house balance at zero if it does not exist and
/// leaves it untouched on every later startup.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - House account present
/// - `Err(AppError)` - Database error during the insert
pub async fn init_reward_ledger(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    RewardLedgerRepository::new(db).ensure_house_account().await?;

    Ok(())
}
