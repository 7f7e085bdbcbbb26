use serenity::all::{Mentionable, Role, RoleId};
use std::collections::HashMap;

use crate::bot::command::{Context, Error};

pub const ROLE_MISSING: &str = "Role doesn't exist";
pub const PERMISSION_DENIED: &str = "You do not have permission to do that!";

/// Grants the trusted role to the author
#[poise::command(prefix_command, guild_only)]
pub async fn assign(ctx: Context<'_>) -> Result<(), Error> {
    let role_name = &ctx.data().config.trusted_role;
    let guild_id = ctx.guild_id().ok_or("Command used outside of a guild")?;
    let Some(role) = trusted_role(ctx).await? else {
        ctx.say(ROLE_MISSING).await?;
        return Ok(());
    };

    ctx.http()
        .add_member_role(
            guild_id,
            ctx.author().id,
            role.id,
            Some("Self-assigned through the assign command"),
        )
        .await?;

    ctx.say(format!(
        "{} is now assigned to {}",
        ctx.author().mention(),
        role_name
    ))
    .await?;
    Ok(())
}

/// Revokes the trusted role from the author
#[poise::command(prefix_command, guild_only)]
pub async fn remove(ctx: Context<'_>) -> Result<(), Error> {
    let role_name = &ctx.data().config.trusted_role;
    let guild_id = ctx.guild_id().ok_or("Command used outside of a guild")?;
    let Some(role) = trusted_role(ctx).await? else {
        ctx.say(ROLE_MISSING).await?;
        return Ok(());
    };

    ctx.http()
        .remove_member_role(
            guild_id,
            ctx.author().id,
            role.id,
            Some("Self-removed through the remove command"),
        )
        .await?;

    ctx.say(format!(
        "{} has had the {} removed",
        ctx.author().mention(),
        role_name
    ))
    .await?;
    Ok(())
}

/// Members-only greeting
#[poise::command(prefix_command, guild_only, check = "has_trusted_role")]
pub async fn secret(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say("Welcome to the club!").await?;
    Ok(())
}

/// Passes when the author holds the trusted role in the invoking guild.
async fn has_trusted_role(ctx: Context<'_>) -> Result<bool, Error> {
    let Some(role) = trusted_role(ctx).await? else {
        return Ok(false);
    };
    let Some(member) = ctx.author_member().await else {
        return Ok(false);
    };

    Ok(member_has_role(&member.roles, role.id))
}

/// Fetches the invoking guild's roles and picks the trusted one.
async fn trusted_role(ctx: Context<'_>) -> Result<Option<Role>, Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(None);
    };

    let roles = guild_id.roles(ctx.http()).await?;

    Ok(find_role_by_name(&roles, &ctx.data().config.trusted_role).cloned())
}

/// Finds a role by exact, case-sensitive name.
pub fn find_role_by_name<'a>(roles: &'a HashMap<RoleId, Role>, name: &str) -> Option<&'a Role> {
    roles.values().find(|role| role.name == name)
}

fn member_has_role(member_roles: &[RoleId], role_id: RoleId) -> bool {
    member_roles.contains(&role_id)
}
