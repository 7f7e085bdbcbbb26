use serenity::all::{CreateEmbed, CreateMessage, Mentionable};

use crate::bot::command::{Context, Error};

/// Reactions added to every poll, in order.
pub const POLL_REACTIONS: [char; 2] = ['👍', '👎'];

/// Greets the author
#[poise::command(prefix_command)]
pub async fn hello(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(format!("Hello {}!", ctx.author().mention())).await?;
    Ok(())
}

/// Echoes a message back to the author in a DM
#[poise::command(prefix_command)]
pub async fn dm(ctx: Context<'_>, #[rest] msg: String) -> Result<(), Error> {
    ctx.author()
        .direct_message(
            ctx.serenity_context(),
            CreateMessage::new().content(format!("You said {}", msg)),
        )
        .await?;
    Ok(())
}

/// Replies to the invoking message
#[poise::command(prefix_command)]
pub async fn reply(ctx: Context<'_>) -> Result<(), Error> {
    ctx.send(
        poise::CreateReply::default()
            .content("This is a reply to your message!")
            .reply(true),
    )
    .await?;
    Ok(())
}

/// Posts a yes/no poll
#[poise::command(prefix_command)]
pub async fn poll(ctx: Context<'_>, #[rest] question: String) -> Result<(), Error> {
    let handle = ctx
        .send(poise::CreateReply::default().embed(poll_embed(&question)))
        .await?;
    let message = handle.message().await?;

    for reaction in POLL_REACTIONS {
        message.react(ctx.serenity_context(), reaction).await?;
    }

    Ok(())
}

fn poll_embed(question: &str) -> CreateEmbed {
    CreateEmbed::new().title("New Poll").description(question)
}
