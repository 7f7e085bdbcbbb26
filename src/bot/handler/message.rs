use serenity::all::{Context, Mentionable, Message};

use crate::{service::moderation::WordFilter, state::BotState};

/// Handle message creation in a channel
///
/// Deletes messages containing a banned word and warns the author in the same
/// channel. The bot's own messages are ignored. Prefix commands are dispatched by
/// the command framework independently of this handler.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    let bot_id = ctx.cache.current_user().id;
    if message.author.id == bot_id {
        return;
    }

    let filter = WordFilter::new(&state.config.banned_words);
    let Some(word) = filter.find_banned_word(&message.content) else {
        return;
    };

    tracing::info!(
        "Deleting message {} from {} ({}) in channel {}: contains '{}'",
        message.id,
        message.author.name,
        message.author.id,
        message.channel_id,
        word
    );

    if let Err(e) = message.delete(&ctx).await {
        tracing::error!("Failed to delete message {}: {}", message.id, e);
    }

    if let Err(e) = message
        .channel_id
        .say(&ctx.http, warning_message(&message.author.mention()))
        .await
    {
        tracing::error!(
            "Failed to warn {} in channel {}: {}",
            message.author.id,
            message.channel_id,
            e
        );
    }
}

fn warning_message(mention: &impl std::fmt::Display) -> String {
    format!("{} - dont use that word!", mention)
}
