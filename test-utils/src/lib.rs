//! Rollcall Test Utils
//!
//! Provides shared testing utilities for the rollcall bot. This crate offers a
//! builder for creating isolated test contexts backed by a temporary directory with
//! an optional pre-seeded roster file, plus factories for Serenity objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring the roster file of a test
//! - **TestContext**: Test environment owning the temporary directory
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_roster_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_roster_line("1|Alice|2024-01-01 00:00:00 CET")
//!         .build()?;
//!
//!     let store = RosterStore::new(test.roster_path());
//!     // Perform roster operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
