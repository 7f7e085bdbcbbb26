//! Domain models shared between the roster store, services and bot handlers.

pub mod roster;
