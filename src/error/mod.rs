//! Error types for the bot.
//!
//! `AppError` is the top-level error that startup code, the scheduler and the
//! event handlers work with. It wraps the domain errors of the roster store and
//! configuration loading as well as errors coming from Discord and the scheduler.
//! Event handlers never propagate it further; they log it and drop the event.

pub mod config;
pub mod roster;

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{config::ConfigError, roster::RosterError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Roster file could not be read or written.
    #[error(transparent)]
    RosterErr(#[from] RosterError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The log file configured through `LOG_FILE` could not be created.
    #[error("Failed to open log file {path}: {source}")]
    LogFileErr {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
