//! Ready event handler for bot initialization.
//!
//! The `ready` event fires after the bot connects to Discord's gateway and
//! completes the initial handshake, and again after a full reconnect. Each time,
//! the roster is reconciled against the live membership of every guild so joins
//! missed while the bot was offline are recorded.

use serenity::all::{Context, Ready};

use crate::{scheduler::roster_sync::process_roster_sync, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state holding the roster
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    match state.roster.records().await {
        Ok(lines) => {
            let known = lines.iter().filter(|line| line.id().is_some()).count();
            tracing::info!(
                "Roster {} holds {} record(s) and {} legacy line(s)",
                state.roster.path().display(),
                known,
                lines.len() - known
            );
        }
        Err(e) => tracing::error!("Failed to read roster: {}", e),
    }

    match process_roster_sync(state, &ctx.http).await {
        Ok(added) => tracing::info!("Startup roster sync complete, {} member(s) added", added),
        Err(e) => tracing::error!("Startup roster sync failed: {}", e),
    }
}
