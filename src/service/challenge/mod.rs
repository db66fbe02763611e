//! Challenge trigger-and-reward engine.
//!
//! For each configured guild the engine decides when to spawn a challenge
//! (post a question and remember the expected answer) and matches later
//! messages against the pending answer to grant a reward.
//!
//! Two independent event sources drive it: the gateway message stream (many
//! events in flight, for different guilds and occasionally the same guild) and
//! a 60-second sweep tick that visits every enabled guild sequentially. The
//! implicit per-guild state machine is Idle/counting → Active → Idle, held in
//! [`state::TriggerState`]; the persisted configuration never carries
//! ephemeral fields.
//!
//! Failures stay local: a guild whose channel cannot be resolved, or whose
//! post fails, is skipped for that event or tick without affecting any other
//! guild.

pub mod catalog;
pub mod notifier;
pub mod state;

#[cfg(test)]
mod test;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{challenge_config::ChallengeConfigRepository, reward::RewardLedgerRepository},
    error::AppError,
    model::challenge::{ChallengeConfig, MessageEvent, TriggerMode},
    service::challenge::{notifier::Notifier, state::TriggerState},
    util::parse::parse_u64_from_string,
};

/// Units credited to a user's ledger balance for a correct answer.
pub const REWARD_AMOUNT: i64 = 2500;

/// Orchestrates triggering, spawning, and answer matching for all guilds.
///
/// Cheap to construct; the bot handler and the sweep each build one per event
/// over the shared database connection and trigger state.
pub struct ChallengeEngine<'a> {
    db: &'a DatabaseConnection,
    state: &'a TriggerState,
    notifier: &'a dyn Notifier,
}

impl<'a> ChallengeEngine<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        state: &'a TriggerState,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            db,
            state,
            notifier,
        }
    }

    /// Processes one incoming guild message.
    ///
    /// Bot authors and unconfigured/disabled guilds are ignored. A pending
    /// answer match is claimed before any spawn can overwrite the active slot,
    /// so a message that both completes an interval and answers the live
    /// challenge is scored against the challenge that existed when it arrived,
    /// never against the one it spawns.
    pub async fn handle_message(&self, event: &MessageEvent) -> Result<(), AppError> {
        if event.author_is_bot {
            return Ok(());
        }

        let repo = ChallengeConfigRepository::new(self.db);
        let Some(config) = repo.find_by_guild_id(event.guild_id).await? else {
            return Ok(());
        };
        if !config.enabled {
            return Ok(());
        }

        let claimed = self.state.claim_match(event.guild_id, &event.content).await;

        if config.mode == TriggerMode::Messages
            && self
                .state
                .reached_interval(event.guild_id, config.interval as u64)
                .await
        {
            self.spawn(event.guild_id, &config, Utc::now()).await?;
        }

        if let Some(challenge) = claimed {
            self.deliver_reward(event, challenge).await?;
        }

        Ok(())
    }

    /// Runs one sweep tick over every enabled time-mode guild.
    ///
    /// A failure for one guild is logged and never aborts the remaining
    /// guilds. `last_spawn_at` advances to the tick time whenever the interval
    /// elapsed, even when channel resolution skipped the post, so a broken
    /// channel does not cause a burst of spawns once it is fixed.
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        let repo = ChallengeConfigRepository::new(self.db);
        let configs = repo.get_enabled().await?;

        for config in configs {
            if config.mode != TriggerMode::Time {
                continue;
            }

            let guild_id = match parse_u64_from_string(config.guild_id.clone()) {
                Ok(id) => id,
                Err(e) => {
                    tracing::error!("Skipping config with invalid guild id: {}", e);
                    continue;
                }
            };

            let elapsed = now.signed_duration_since(config.last_spawn_at);
            if elapsed < Duration::seconds(config.interval) {
                continue;
            }

            if let Err(e) = self.spawn(guild_id, &config, now).await {
                tracing::error!("Failed to spawn timed challenge in guild {}: {}", guild_id, e);
            }

            if let Err(e) = repo.update_last_spawn(guild_id, now).await {
                tracing::error!(
                    "Failed to update last spawn time for guild {}: {}",
                    guild_id,
                    e
                );
            }
        }

        Ok(())
    }

    /// Spawns a challenge: generate, record as active, announce.
    ///
    /// An unresolvable destination channel skips the spawn silently. No state
    /// rollback is needed on a skip — the message counter reset is idempotent.
    /// The announcement itself is fire-and-forget.
    async fn spawn(
        &self,
        guild_id: u64,
        config: &ChallengeConfig,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let channel_id = parse_u64_from_string(config.channel_id.clone())?;

        if !self.notifier.resolve_channel(guild_id, channel_id).await {
            tracing::debug!(
                "Challenge channel {} not resolvable in guild {}, skipping spawn",
                channel_id,
                guild_id
            );
            return Ok(());
        }

        let challenge = catalog::generate();

        self.state
            .set_active(guild_id, challenge.answer, now)
            .await;

        let text = format!(
            "🧠 **Challenge!**\n{}\nAnswer correctly to earn points!",
            challenge.question
        );
        if let Err(e) = self.notifier.post(channel_id, text).await {
            tracing::warn!("Failed to post challenge in guild {}: {}", guild_id, e);
        }

        Ok(())
    }

    /// Credits a claimed win and posts the confirmation.
    ///
    /// The ledger increment must succeed before the confirmation goes out; on
    /// a storage error the claimed challenge is restored so the win stays
    /// answerable instead of being silently lost.
    async fn deliver_reward(
        &self,
        event: &MessageEvent,
        challenge: state::ActiveChallenge,
    ) -> Result<(), AppError> {
        let ledger = RewardLedgerRepository::new(self.db);

        if let Err(e) = ledger.increment(event.author_id, REWARD_AMOUNT).await {
            self.state.restore_active(event.guild_id, challenge).await;
            return Err(e.into());
        }

        let text = format!(
            "🎉 <@{}> got it right! You earned **{} points!**",
            event.author_id, REWARD_AMOUNT
        );
        if let Err(e) = self.notifier.post(event.channel_id, text).await {
            tracing::warn!(
                "Failed to post reward confirmation in guild {}: {}",
                event.guild_id,
                e
            );
        }

        Ok(())
    }
}
