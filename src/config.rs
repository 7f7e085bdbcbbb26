use chrono_tz::Tz;
use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_ROSTER_PATH: &str = "User_List";
const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_TRUSTED_ROLE: &str = "Trusted";
const DEFAULT_BANNED_WORDS: &str = "shit";
/// Top of every hour.
const DEFAULT_ROSTER_SYNC_CRON: &str = "0 0 * * * *";
const DEFAULT_ROSTER_TIMEZONE: &str = "Europe/Berlin";
const DEFAULT_ROSTER_ZONE_LABEL: &str = "CET";

pub struct Config {
    pub discord_token: String,

    pub roster_path: PathBuf,
    pub roster_sync_cron: String,
    pub roster_timezone: Tz,
    pub roster_zone_label: String,

    pub command_prefix: String,
    pub trusted_role: String,
    pub banned_words: Vec<String>,

    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let var_or = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let timezone = var_or("ROSTER_TIMEZONE", DEFAULT_ROSTER_TIMEZONE);
        let roster_timezone = timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "ROSTER_TIMEZONE".to_string(),
                value: timezone.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            discord_token: var("DISCORD_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            roster_path: PathBuf::from(var_or("ROSTER_PATH", DEFAULT_ROSTER_PATH)),
            roster_sync_cron: var_or("ROSTER_SYNC_CRON", DEFAULT_ROSTER_SYNC_CRON),
            roster_timezone,
            roster_zone_label: var_or("ROSTER_ZONE_LABEL", DEFAULT_ROSTER_ZONE_LABEL),
            command_prefix: var_or("COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
            trusted_role: var_or("TRUSTED_ROLE", DEFAULT_TRUSTED_ROLE),
            banned_words: parse_word_list(&var_or("BANNED_WORDS", DEFAULT_BANNED_WORDS)),
            log_file: var("LOG_FILE").map(PathBuf::from),
        })
    }
}

/// Splits a comma separated list into lowercase, non-empty words.
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}
