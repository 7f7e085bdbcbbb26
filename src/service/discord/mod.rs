pub mod guild_member;

pub use guild_member::DiscordGuildMemberService;
