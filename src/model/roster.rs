use serenity::all::Member;

/// Separator between the fields of a roster line.
pub const FIELD_SEPARATOR: char = '|';

/// A member as currently reported by Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveMember {
    pub id: u64,
    pub display_name: String,
    /// Bot and other automated accounts never get roster records.
    pub is_bot: bool,
}

impl LiveMember {
    pub fn new(id: u64, display_name: impl Into<String>, is_bot: bool) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_bot,
        }
    }
}

impl From<&Member> for LiveMember {
    fn from(member: &Member) -> Self {
        Self::new(member.user.id.get(), member.user.name.clone(), member.user.bot)
    }
}

/// One persisted roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub id: u64,
    pub display_name: String,
    pub first_seen_at: String,
}

impl MemberRecord {
    pub fn new(id: u64, display_name: &str, first_seen_at: &str) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            first_seen_at: first_seen_at.to_string(),
        }
    }

    /// Renders the record as `id|display_name|first_seen_at` without a line terminator.
    ///
    /// Separators and line breaks inside the display name are replaced with spaces so
    /// the record always occupies exactly one line with three fields.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.id,
            sanitize_field(&self.display_name),
            self.first_seen_at,
            sep = FIELD_SEPARATOR
        )
    }
}

fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            FIELD_SEPARATOR | '\r' | '\n' => ' ',
            c => c,
        })
        .collect()
}
