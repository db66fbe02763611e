use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::challenge::{notifier::DiscordNotifier, state::TriggerState, ChallengeEngine},
};

/// Starts the challenge sweep scheduler
///
/// This scheduler runs every minute and visits every enabled guild's challenge
/// configuration, spawning a challenge in each time-mode guild whose interval
/// has elapsed. The job body runs to completion before the next tick is
/// scheduled, so ticks never overlap.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for posting challenges
/// - `state`: Shared ephemeral trigger state
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    state: Arc<TriggerState>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_http = discord_http.clone();
    let job_state = state.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = run_sweep(&db, http, &state).await {
                tracing::error!("Error running challenge sweep: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Challenge sweep scheduler started");

    Ok(())
}

/// Runs one sweep tick over all enabled guilds
async fn run_sweep(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    state: &TriggerState,
) -> Result<(), AppError> {
    let notifier = DiscordNotifier::new(discord_http);
    let engine = ChallengeEngine::new(db, state, &notifier);

    engine.sweep(Utc::now()).await
}
