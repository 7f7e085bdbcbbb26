//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with the given id and name.
///
/// The role is deserialized from JSON the way Discord returns it from a guild role
/// listing. Everything except id and name is fixed: no color, position 1, zero
/// permissions, not managed by an integration.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name, matched exactly by the role commands
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Trusted");
/// assert_eq!(role.name, "Trusted");
/// ```
pub fn create_test_role(role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
