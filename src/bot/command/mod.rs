//! Prefix commands served by the `poise` framework.
//!
//! Commands receive the shared [`BotState`] as framework data. Role commands look
//! up the role named by `TRUSTED_ROLE` in the invoking guild by exact name.

use std::sync::Arc;

use crate::state::BotState;

pub mod general;
pub mod role;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Arc<BotState>, Error>;

/// Every command the bot answers to.
pub fn commands() -> Vec<poise::Command<Arc<BotState>, Error>> {
    vec![
        general::hello(),
        general::dm(),
        general::reply(),
        general::poll(),
        role::assign(),
        role::remove(),
        role::secret(),
    ]
}

/// Framework error handler.
///
/// A failed role check (only `secret` has one) is answered in the channel; command
/// failures are logged; everything else goes to poise's builtin handler.
pub async fn on_error(error: poise::FrameworkError<'_, Arc<BotState>, Error>) {
    match error {
        poise::FrameworkError::CommandCheckFailed {
            error: None, ctx, ..
        } => {
            if let Err(e) = ctx.say(role::PERMISSION_DENIED).await {
                tracing::error!("Failed to report missing role: {}", e);
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {}", ctx.command().name, error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}
