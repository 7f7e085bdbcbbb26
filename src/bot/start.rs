use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::{
    bot::{command, handler::Handler},
    error::AppError,
    state::BotState,
};

/// Initializes the Discord bot client without starting it
///
/// Builds the `poise` command framework and the gateway event handler around the
/// shared state. The returned client's HTTP handle can be shared with the roster
/// sync scheduler before the client is started.
///
/// # Arguments
/// - `state` - Shared bot state
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet connected
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(state: Arc<BotState>) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let framework_state = state.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command::commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(state.config.command_prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(command::on_error(error)),
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| Box::pin(async move { Ok(framework_state) }))
        .build();

    let client = Client::builder(&state.config.discord_token, intents)
        .framework(framework)
        .event_handler(Handler::new(state.clone()))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Connects to the gateway and processes events until the shard manager shuts
/// down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
