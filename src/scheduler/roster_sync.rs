use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{discord::DiscordGuildMemberService, roster::RosterService},
    state::BotState,
};

/// Starts the roster sync scheduler
///
/// Runs the reconciliation sweep on the `ROSTER_SYNC_CRON` schedule (hourly by
/// default). The startup sweep is triggered separately by the ready handler.
///
/// # Arguments
/// - `state`: Shared bot state holding the roster store
/// - `discord_http`: Discord HTTP client for listing guilds and members
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)`: Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    state: Arc<BotState>,
    discord_http: Arc<Http>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let job_http = discord_http.clone();

    let job = Job::new_async(state.config.roster_sync_cron.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = process_roster_sync(&state, &http).await {
                tracing::error!("Error processing roster sync: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Roster sync scheduler started with schedule '{}'",
        state.config.roster_sync_cron
    );

    Ok(scheduler)
}

/// Runs one reconciliation sweep
///
/// Fetches the live membership of every guild the bot is in and appends members
/// missing from the roster. The sweep is begun before the fetch so members who
/// leave while it runs are not added back. A failure abandons this sweep only; the
/// next scheduled run starts from scratch.
///
/// # Returns
/// - `Ok(usize)`: Number of members added to the roster
/// - `Err(AppError)`: Fetching members from Discord or updating the roster failed
pub async fn process_roster_sync(state: &BotState, discord_http: &Http) -> Result<usize, AppError> {
    let sweep = state.roster.begin_sweep();

    let members = DiscordGuildMemberService::new(discord_http)
        .fetch_live_members()
        .await?;

    RosterService::new(&state.roster, &state.clock)
        .sync_members(&sweep, &members)
        .await
}
