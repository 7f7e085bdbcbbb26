use serenity::all::{Context, CreateMessage, GuildId, Member, User};

use crate::{model::roster::LiveMember, service::roster::RosterService, state::BotState};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Records the member in the roster and sends them a welcome DM. The two are
/// independent: a failed roster write does not suppress the welcome, and members
/// with closed DMs are still recorded.
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    let member = LiveMember::from(&new_member);
    let guild_id = new_member.guild_id;

    tracing::debug!(
        "Member {} ({}) joined guild {}",
        member.display_name,
        member.id,
        guild_id
    );

    let roster_service = RosterService::new(&state.roster, &state.clock);
    if let Err(e) = roster_service.record_join(&member).await {
        tracing::error!("Failed to record member {} in roster: {}", member.id, e);
    }

    if member.is_bot {
        return;
    }

    let welcome = CreateMessage::new().content(welcome_message(&member.display_name));
    if let Err(e) = new_member.user.direct_message(&ctx, welcome).await {
        tracing::warn!(
            "Failed to send welcome message to {} ({}): {}",
            member.display_name,
            member.id,
            e
        );
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &BotState,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    tracing::debug!("Member {} ({}) left guild {}", user.name, user.id, guild_id);

    let roster_service = RosterService::new(&state.roster, &state.clock);
    if let Err(e) = roster_service.record_leave(user.id.get()).await {
        tracing::error!("Failed to remove member {} from roster: {}", user.id, e);
    }
}

fn welcome_message(name: &str) -> String {
    format!("Welcome to the server {}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_welcome_message() {
        assert_eq!(welcome_message("alice"), "Welcome to the server alice");
    }
}
