//! Discord bot integration.
//!
//! The bot keeps the member roster in step with the guilds it is in, moderates
//! message content and serves a few prefix commands. Gateway events are handled by
//! [`handler::Handler`]; commands are served by a `poise` framework sharing the same
//! [`BotState`](crate::state::BotState).
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guilds the bot is in
//! - `GUILD_MEMBERS` - Receive member join/leave events and list members (privileged intent)
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Receive messages for moderation and commands
//! - `MESSAGE_CONTENT` - Read message text for moderation and prefix commands (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
