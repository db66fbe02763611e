//! In-memory trigger state: per-guild message counters and active challenges.
//!
//! Process-lifetime only — nothing here survives a restart, and that is by
//! contract: in-flight challenges are explicitly ephemeral. All operations are
//! linearizable under concurrent invocation from multiple event handlers, for
//! different guilds and for the same guild.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// The challenge currently awaiting an answer in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveChallenge {
    /// Expected answer, matched trimmed and case-insensitively.
    pub answer: String,
    /// When the challenge was spawned.
    pub spawned_at: DateTime<Utc>,
}

/// Concurrency-safe keyed store for the engine's ephemeral per-guild state.
///
/// Counters and active challenges live in separate maps so answer matching
/// never contends with message counting.
#[derive(Default)]
pub struct TriggerState {
    /// Messages observed per guild since the last spawn.
    counters: Mutex<HashMap<u64, u64>>,
    /// At most one active challenge per guild.
    active: Mutex<HashMap<u64, ActiveChallenge>>,
}

impl TriggerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically increments a guild's message counter and returns the new value.
    ///
    /// An absent counter starts at 0, so the first call returns 1. Two
    /// concurrent callers never observe the same value.
    pub async fn increment_and_get(&self, guild_id: u64) -> u64 {
        let mut counters = self.counters.lock().await;
        let counter = counters.entry(guild_id).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Atomically increments a guild's counter and reports whether the interval
    /// was reached, resetting the counter to 0 when it was.
    ///
    /// Increment, comparison, and reset happen under one lock, so of any set of
    /// concurrent callers exactly one observes the trigger.
    pub async fn reached_interval(&self, guild_id: u64, interval: u64) -> bool {
        let mut counters = self.counters.lock().await;
        let counter = counters.entry(guild_id).or_insert(0);
        *counter += 1;
        if *counter >= interval.max(1) {
            *counter = 0;
            true
        } else {
            false
        }
    }

    /// Resets a guild's message counter to 0.
    pub async fn reset_counter(&self, guild_id: u64) {
        self.counters.lock().await.insert(guild_id, 0);
    }

    /// Current counter value for a guild (0 when absent).
    pub async fn counter(&self, guild_id: u64) -> u64 {
        self.counters
            .lock()
            .await
            .get(&guild_id)
            .copied()
            .unwrap_or(0)
    }

    /// Records a guild's active challenge, replacing any existing one.
    ///
    /// The invariant is "at most one active challenge per guild", not "the
    /// first spawn wins": a racing second spawner overwrites.
    pub async fn set_active(&self, guild_id: u64, answer: String, now: DateTime<Utc>) {
        self.active.lock().await.insert(
            guild_id,
            ActiveChallenge {
                answer,
                spawned_at: now,
            },
        );
    }

    /// Snapshot of a guild's active challenge, if any.
    pub async fn active(&self, guild_id: u64) -> Option<ActiveChallenge> {
        self.active.lock().await.get(&guild_id).cloned()
    }

    /// Removes a guild's active challenge, if any.
    pub async fn clear_active(&self, guild_id: u64) {
        self.active.lock().await.remove(&guild_id);
    }

    /// Atomically claims a guild's active challenge when `text` matches its
    /// answer (trimmed, case-insensitive).
    ///
    /// The compare-and-remove happens under one lock, so of any number of
    /// concurrent matching messages exactly one claims the challenge; the rest
    /// see `None`.
    pub async fn claim_match(&self, guild_id: u64, text: &str) -> Option<ActiveChallenge> {
        let mut active = self.active.lock().await;

        let matches = active
            .get(&guild_id)
            .map(|challenge| normalize(text) == normalize(&challenge.answer))
            .unwrap_or(false);

        if matches {
            active.remove(&guild_id)
        } else {
            None
        }
    }

    /// Puts a claimed challenge back, unless a newer one has spawned since.
    ///
    /// Used when the reward write fails after a claim: the win stays
    /// retryable without clobbering a challenge spawned in the meantime.
    pub async fn restore_active(&self, guild_id: u64, challenge: ActiveChallenge) {
        self.active.lock().await.entry(guild_id).or_insert(challenge);
    }
}

/// Answer-matching normalization: leading/trailing whitespace ignored,
/// case-insensitive.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
