use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. When `LOG_FILE` is set,
/// output goes to that file instead of stdout; the file is truncated on every
/// start.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LogFileErr)` - The log file could not be created
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::LogFileErr {
                path: path.clone(),
                source,
            })?;

            subscriber
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => subscriber.init(),
    }

    Ok(())
}
