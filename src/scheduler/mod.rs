//! Cron jobs for automated tasks.

pub mod challenge_sweep;
