//! Business logic between the Discord-facing handlers and the roster store.
//!
//! Services are cheap borrowing wrappers created per event or per sweep. They add
//! the timestamping, bot filtering and logging around the raw store operations,
//! and gather live membership from Discord for the reconciliation sweep.

pub mod discord;
pub mod moderation;
pub mod roster;
