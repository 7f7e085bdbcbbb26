use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// File name of the roster inside the test directory.
const ROSTER_FILE_NAME: &str = "User_List";

/// Test context owning a temporary directory for roster files.
///
/// The directory and everything in it is deleted when the context is dropped, so
/// each test works against its own isolated roster.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh directory and no roster file
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root of the temporary directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the roster file, whether or not it exists yet.
    pub fn roster_path(&self) -> PathBuf {
        self.dir.path().join(ROSTER_FILE_NAME)
    }

    pub fn roster_exists(&self) -> bool {
        self.roster_path().exists()
    }

    /// Overwrites the roster file with the given contents.
    pub fn write_roster(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.roster_path(), contents)?;
        Ok(())
    }

    /// Reads the roster file.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Full file contents
    /// - `Ok(None)` - The roster file does not exist
    /// - `Err(TestError::Io)` - The file exists but could not be read
    pub fn read_roster(&self) -> Result<Option<String>, TestError> {
        match std::fs::read_to_string(self.roster_path()) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads the roster file as lines, empty when the file does not exist.
    pub fn roster_lines(&self) -> Result<Vec<String>, TestError> {
        Ok(self
            .read_roster()?
            .map(|contents| contents.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }
}
