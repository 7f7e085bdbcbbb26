//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Guild id used for members created by [`create_test_member`].
pub const TEST_GUILD_ID: u64 = 900000000000000000;

/// Creates a test Serenity Member with customizable user fields.
///
/// Builds the member by deserializing a JSON payload shaped like Discord's guild
/// member object, so the result is exactly what the HTTP client would hand back
/// from a member listing. The member has no roles or nickname and belongs to
/// [`TEST_GUILD_ID`].
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username
/// - `bot` - Whether the account is a bot
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(123456789, "alice", false);
/// assert_eq!(member.user.name, "alice");
/// assert!(!member.user.bot);
/// ```
pub fn create_test_member(user_id: u64, username: &str, bot: bool) -> Member {
    serde_json::from_value(serde_json::json!({
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": bot,
        },
        "guild_id": TEST_GUILD_ID.to_string(),
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
