use thiserror::Error;

/// Errors that can occur while setting up or inspecting a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Filesystem error while creating the temporary directory or touching the
    /// roster file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
