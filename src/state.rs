//! Shared bot state.
//!
//! `BotState` is created once at startup and shared as `Arc<BotState>` between the
//! gateway event handler, the command framework and the roster sync scheduler. It
//! replaces any global client state: everything that handlers need is reached
//! through it.

use crate::{config::Config, data::roster::RosterStore, util::time::RosterClock};

pub struct BotState {
    pub config: Config,
    /// Member roster file, shared by the join/leave handlers and the sync sweep
    pub roster: RosterStore,
    /// Timestamp source for new roster records
    pub clock: RosterClock,
}

impl BotState {
    pub fn new(config: Config) -> Self {
        let roster = RosterStore::new(config.roster_path.clone());
        let clock = RosterClock::new(config.roster_timezone, config.roster_zone_label.clone());

        Self {
            config,
            roster,
            clock,
        }
    }
}
