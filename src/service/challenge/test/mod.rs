use sea_orm::DatabaseConnection;
use serenity::async_trait;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::model::challenge::MessageEvent;
use crate::service::challenge::notifier::Notifier;
use crate::service::challenge::state::TriggerState;
use crate::service::challenge::ChallengeEngine;


/// Notifier double that records posts instead of calling Discord.
pub(super) struct RecordingNotifier {
    resolvable: bool,
    fail_posts: bool,
    posts: Mutex<Vec<(u64, String)>>,
}

impl RecordingNotifier {
    /// Every channel resolves and every post succeeds.
    pub fn new() -> Self {
        Self {
            resolvable: true,
            fail_posts: false,
            posts: Mutex::new(Vec::new()),
        }
    }

    /// No channel resolves.
    pub fn unresolvable() -> Self {
        Self {
            resolvable: false,
            ..Self::new()
        }
    }

    /// Channels resolve but every post fails.
    pub fn failing_posts() -> Self {
        Self {
            fail_posts: true,
            ..Self::new()
        }
    }

    /// Snapshot of all `(channel_id, text)` posts attempted so far.
    pub async fn recorded(&self) -> Vec<(u64, String)> {
        self.posts.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn resolve_channel(&self, _guild_id: u64, _channel_id: u64) -> bool {
        self.resolvable
    }

    async fn post(&self, channel_id: u64, text: String) -> Result<(), AppError> {
        self.posts.lock().await.push((channel_id, text));

        if self.fail_posts {
            return Err(AppError::InternalError("post failed".to_string()));
        }

        Ok(())
    }
}

/// A plain guild message from a human author.
pub(super) fn message(guild_id: u64, content: &str) -> MessageEvent {
    MessageEvent {
        guild_id,
        channel_id: 500,
        author_id: 900,
        author_is_bot: false,
        content: content.to_string(),
    }
}

pub(super) fn engine<'a>(
    db: &'a DatabaseConnection,
    state: &'a TriggerState,
    notifier: &'a RecordingNotifier,
) -> ChallengeEngine<'a> {
    ChallengeEngine::new(db, state, notifier)
}
