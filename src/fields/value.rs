//! fields::value
//!
//! Native field value representations.
//!
//! Each [`FieldType`](super::FieldType) fixes exactly one of these
//! variants; the dispatch module enforces the pairing.

use chrono::{DateTime, Utc};

/// A decoded, natively-typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Boolean fields.
    Boolean(bool),
    /// Date, start-date, and start-time fields.
    Date(DateTime<Utc>),
    /// Duration fields, in milliseconds.
    Duration(u64),
    /// Long (integer) fields.
    Long(i64),
    /// Single-valued text fields.
    Text(String),
    /// Multi-valued text fields.
    TextList(Vec<String>),
}

impl FieldValue {
    /// A short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Date(_) => "date",
            Self::Duration(_) => "duration",
            Self::Long(_) => "long",
            Self::Text(_) => "text",
            Self::TextList(_) => "text list",
        }
    }

    /// The text form, for single-valued text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list form, for multi-valued text values.
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(l) => Some(l),
            _ => None,
        }
    }

    /// The instant, for date-like values.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    /// The millisecond count, for duration values.
    pub fn as_duration_ms(&self) -> Option<u64> {
        match self {
            Self::Duration(ms) => Some(*ms),
            _ => None,
        }
    }
}
