pub mod prelude;

pub mod challenge_config;
pub mod reward_balance;
