pub use super::challenge_config::Entity as ChallengeConfig;
pub use super::reward_balance::Entity as RewardBalance;
