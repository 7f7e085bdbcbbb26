//! Cron jobs for recurring bot work.

pub mod roster_sync;
