use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a customizable roster file.
///
/// By default no roster file is created, which is how the bot sees a fresh install.
/// Adding lines (or calling `with_empty_roster`) makes `build()` write the file.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_roster_line("1|Alice|2024-01-01 00:00:00 CET")
///     .with_roster_line("legacy_user - Joined: 2023-05-01 10:00:00 CET")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Lines to seed the roster file with, `None` when no file should exist.
    ///
    /// Each line is written followed by a newline, in the order added.
    roster: Option<Vec<String>>,
}

impl TestBuilder {
    /// Creates a new test builder with no roster file configured.
    pub fn new() -> Self {
        Self { roster: None }
    }

    /// Creates the roster file without any lines.
    pub fn with_empty_roster(mut self) -> Self {
        self.roster.get_or_insert_with(Vec::new);
        self
    }

    /// Adds a raw line to the roster file.
    ///
    /// The line is written verbatim, so both the current `id|name|timestamp` layout
    /// and legacy layouts can be seeded.
    ///
    /// # Arguments
    /// - `line` - Line content without terminator
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_roster_line(mut self, line: impl Into<String>) -> Self {
        self.roster.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Adds several raw lines to the roster file, in order.
    pub fn with_roster_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster
            .get_or_insert_with(Vec::new)
            .extend(lines.into_iter().map(Into::into));
        self
    }

    /// Builds the test context.
    ///
    /// Creates a fresh temporary directory and, if configured, writes the roster
    /// file into it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context owning the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write the roster
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(lines) = self.roster {
            let contents: String = lines.iter().map(|line| format!("{}\n", line)).collect();
            context.write_roster(&contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
