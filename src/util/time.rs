use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Produces the timestamp strings written into the roster file.
///
/// Times are rendered as `YYYY-MM-DD HH:MM:SS` in the configured zone, followed by a
/// fixed label. The label is cosmetic: with `Europe/Berlin` and the default `CET`
/// label, summer times are still labelled `CET`, matching existing roster files.
#[derive(Debug, Clone)]
pub struct RosterClock {
    zone: Tz,
    label: String,
}

impl RosterClock {
    pub fn new(zone: Tz, label: impl Into<String>) -> Self {
        Self {
            zone,
            label: label.into(),
        }
    }

    /// Formats the given instant as a roster timestamp.
    pub fn stamp(&self, at: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            at.with_timezone(&self.zone).format("%Y-%m-%d %H:%M:%S"),
            self.label
        )
    }
}
