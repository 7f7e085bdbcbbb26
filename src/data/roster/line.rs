use crate::model::roster::FIELD_SEPARATOR;

/// A single line of the roster file.
///
/// Lines written by the bot parse as `Known`. Anything else (older layouts without a
/// separator, a non-numeric id field, blank lines) is kept as `Opaque` so rewrites
/// can carry it through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterLine {
    Known {
        id: u64,
        display_name: String,
        raw: String,
    },
    Opaque(String),
}

impl RosterLine {
    pub fn parse(raw: &str) -> Self {
        let Some((id_field, rest)) = raw.split_once(FIELD_SEPARATOR) else {
            return Self::Opaque(raw.to_string());
        };

        match id_field.parse::<u64>() {
            Ok(id) => {
                let display_name = rest
                    .split_once(FIELD_SEPARATOR)
                    .map_or(rest, |(name, _)| name);

                Self::Known {
                    id,
                    display_name: display_name.to_string(),
                    raw: raw.to_string(),
                }
            }
            Err(_) => Self::Opaque(raw.to_string()),
        }
    }

    /// Display name of the line, `None` for opaque lines.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Known { display_name, .. } => Some(display_name),
            Self::Opaque(_) => None,
        }
    }

    /// Member id of the line, `None` for opaque lines.
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Known { id, .. } => Some(*id),
            Self::Opaque(_) => None,
        }
    }

    /// The line exactly as it was read, without its terminator.
    pub fn raw(&self) -> &str {
        match self {
            Self::Known { raw, .. } => raw,
            Self::Opaque(raw) => raw,
        }
    }
}
