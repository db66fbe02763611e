//! Entity factories for creating test data with sensible defaults.
//!
//! Each factory provides a builder pattern for creating one entity type, with
//! default values that can be overridden per test scenario.

pub mod challenge_config;
pub mod helpers;
pub mod reward_balance;
