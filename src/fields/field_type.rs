//! fields::field_type
//!
//! The closed set of metadata field types and the JSON wire types they
//! render as.
//!
//! The field type tag drives all value conversion: the enum makes
//! in-process dispatch statically exhaustive, and
//! [`FieldType::parse`] is the single place the unknown-type error can
//! arise (a tag arriving from configuration or the wire).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field type tag outside the closed set.
///
/// Fatal for the field it names; callers should treat construction of
/// the owning catalog view as failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown metadata field type '{0}'")]
pub struct UnknownTypeError(pub String);

/// The closed set of metadata field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    Date,
    Duration,
    IterableText,
    MixedText,
    OrderedText,
    Long,
    StartDate,
    StartTime,
    Text,
    TextLong,
}

impl FieldType {
    /// Parse a type tag.
    ///
    /// Tags are matched case-insensitively in snake case.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTypeError`] for a tag outside the closed set.
    ///
    /// # Example
    ///
    /// ```
    /// use mediameta::fields::FieldType;
    ///
    /// assert_eq!(FieldType::parse("date").unwrap(), FieldType::Date);
    /// assert_eq!(FieldType::parse("MIXED_TEXT").unwrap(), FieldType::MixedText);
    /// assert!(FieldType::parse("blob").is_err());
    /// ```
    pub fn parse(tag: &str) -> Result<Self, UnknownTypeError> {
        match tag.to_ascii_lowercase().as_str() {
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "duration" => Ok(Self::Duration),
            "iterable_text" => Ok(Self::IterableText),
            "mixed_text" => Ok(Self::MixedText),
            "ordered_text" => Ok(Self::OrderedText),
            "long" => Ok(Self::Long),
            "start_date" => Ok(Self::StartDate),
            "start_time" => Ok(Self::StartTime),
            "text" => Ok(Self::Text),
            "text_long" => Ok(Self::TextLong),
            _ => Err(UnknownTypeError(tag.to_string())),
        }
    }

    /// The canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Duration => "duration",
            Self::IterableText => "iterable_text",
            Self::MixedText => "mixed_text",
            Self::OrderedText => "ordered_text",
            Self::Long => "long",
            Self::StartDate => "start_date",
            Self::StartTime => "start_time",
            Self::Text => "text",
            Self::TextLong => "text_long",
        }
    }

    /// The JSON wire type this field renders as.
    pub fn json_type(&self) -> JsonType {
        match self {
            Self::Boolean => JsonType::Boolean,
            Self::Date | Self::StartDate => JsonType::Date,
            // Durations render as HH:MM:SS text even though the native
            // value is a millisecond count
            Self::Duration => JsonType::Text,
            Self::IterableText | Self::MixedText => JsonType::MixedText,
            Self::OrderedText => JsonType::OrderedText,
            Self::Long => JsonType::Number,
            Self::StartTime => JsonType::Time,
            Self::Text => JsonType::Text,
            Self::TextLong => JsonType::TextLong,
        }
    }

    /// Whether the field holds a list of values.
    ///
    /// Only these types accept multiple raw values; every other type
    /// resolves multiples by the last-wins policy.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, Self::MixedText | Self::IterableText)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The JSON wire type a field value renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonType {
    Boolean,
    Date,
    Number,
    Text,
    MixedText,
    OrderedText,
    TextLong,
    Time,
}

impl JsonType {
    /// The wire string for this JSON type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Number => "number",
            Self::Text => "text",
            Self::MixedText => "mixed_text",
            Self::OrderedText => "ordered_text",
            Self::TextLong => "text_long",
            Self::Time => "time",
        }
    }
}
