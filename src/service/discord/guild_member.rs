use serenity::all::{GuildId, GuildInfo};
use serenity::http::{GuildPagination, Http};

use crate::{error::AppError, model::roster::LiveMember};

/// Largest page Discord serves when listing the bot's guilds.
const GUILD_PAGE_SIZE: u64 = 200;
/// Largest page Discord serves when listing guild members.
const MEMBER_PAGE_SIZE: u64 = 1000;

pub struct DiscordGuildMemberService<'a> {
    http: &'a Http,
}

impl<'a> DiscordGuildMemberService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Fetches the current members of every guild the bot is in
    ///
    /// Walks the bot's guild list and each guild's member list page by page. Requires
    /// the `GUILD_MEMBERS` privileged intent. Members of several guilds appear once
    /// per guild; bots are included and flagged.
    ///
    /// # Returns
    /// - `Ok(Vec<LiveMember>)`: Members of all guilds, in guild order
    /// - `Err(AppError::DiscordErr)`: A guild or member listing request failed
    pub async fn fetch_live_members(&self) -> Result<Vec<LiveMember>, AppError> {
        let guilds = self.fetch_guilds().await?;

        let mut members = Vec::new();
        for guild in &guilds {
            let guild_members = self.fetch_guild_members(guild.id).await?;

            tracing::debug!(
                "Fetched {} members from Discord API for guild {} ({})",
                guild_members.len(),
                guild.name,
                guild.id
            );

            members.extend(guild_members);
        }

        Ok(members)
    }

    /// Fetches all guilds the bot is a member of.
    pub async fn fetch_guilds(&self) -> Result<Vec<GuildInfo>, AppError> {
        let mut guilds: Vec<GuildInfo> = Vec::new();

        loop {
            let after = guilds.last().map(|guild| GuildPagination::After(guild.id));
            let page = self.http.get_guilds(after, Some(GUILD_PAGE_SIZE)).await?;
            let page_len = page.len() as u64;

            guilds.extend(page);

            if page_len < GUILD_PAGE_SIZE {
                break;
            }
        }

        Ok(guilds)
    }

    /// Fetches every member of a guild.
    pub async fn fetch_guild_members(&self, guild_id: GuildId) -> Result<Vec<LiveMember>, AppError> {
        let mut members: Vec<LiveMember> = Vec::new();

        loop {
            let after = members.last().map(|member| member.id);
            let page = self
                .http
                .get_guild_members(guild_id, Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let page_len = page.len() as u64;

            members.extend(page.iter().map(LiveMember::from));

            if page_len < MEMBER_PAGE_SIZE {
                break;
            }
        }

        Ok(members)
    }
}
