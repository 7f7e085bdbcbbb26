//! Test factories for creating Serenity API objects.
//!
//! Code that turns Discord data into roster entries or looks up roles works on
//! Serenity structs. These factories build such structs by deserializing JSON,
//! giving tests realistic values without talking to Discord.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod member;
pub mod role;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::create_test_role;
