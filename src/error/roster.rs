use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the roster file that callers have to deal with.
///
/// A missing roster file is never reported here; every store operation treats it
/// as an empty roster. Lines that fail to parse are kept as opaque data and are not
/// errors either.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Reading or writing the roster file failed for a reason other than the file
    /// not existing (permissions, full disk, invalid UTF-8, ...).
    #[error("Roster file {path} could not be accessed: {source}")]
    Io {
        /// Path of the file that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl RosterError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
