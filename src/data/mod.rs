//! Persistence layer.
//!
//! The bot keeps its only state, the member roster, in a flat text file. The
//! `roster` module owns that file and exposes the read, append, remove and
//! reconcile operations the services build on.

pub mod roster;
