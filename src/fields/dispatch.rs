//! fields::dispatch
//!
//! Value conversion for metadata fields: one dispatch table keyed by
//! the field's type tag, mapping between native values and the two wire
//! forms (a JSON-friendly value and a plain display string).
//!
//! # Multi-value policy
//!
//! [`apply_raw_values`] filters out blank strings. When more than one
//! value remains and the field is single-valued, the last value wins
//! and a warning is logged. This is a deliberate legacy compatibility
//! policy, never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde_json::{json, Value};
use thiserror::Error;

use crate::dublincore::encoding;
use crate::dublincore::temporal::Precision;

use super::field::MetadataField;
use super::field_type::{FieldType, UnknownTypeError};
use super::value::FieldValue;

/// Errors from field value conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    #[error("cannot decode '{raw}' as a {field_type} value")]
    Decode { field_type: FieldType, raw: String },

    #[error("a {kind} value does not fit a {field_type} field")]
    Mismatch {
        field_type: FieldType,
        kind: &'static str,
    },
}

/// Check that a value variant fits a type tag.
pub(crate) fn check_value(field_type: FieldType, value: &FieldValue) -> Result<(), FieldError> {
    let fits = matches!(
        (field_type, value),
        (FieldType::Boolean, FieldValue::Boolean(_))
            | (FieldType::Date, FieldValue::Date(_))
            | (FieldType::StartDate, FieldValue::Date(_))
            | (FieldType::StartTime, FieldValue::Date(_))
            | (FieldType::Duration, FieldValue::Duration(_))
            | (FieldType::Long, FieldValue::Long(_))
            | (FieldType::Text, FieldValue::Text(_))
            | (FieldType::TextLong, FieldValue::Text(_))
            | (FieldType::OrderedText, FieldValue::Text(_))
            | (FieldType::IterableText, FieldValue::TextList(_))
            | (FieldType::MixedText, FieldValue::TextList(_))
    );
    if fits {
        Ok(())
    } else {
        Err(FieldError::Mismatch {
            field_type,
            kind: value.kind(),
        })
    }
}

/// Decode one raw string into the native value for a type tag.
///
/// Blank input yields `Ok(None)`. Duration decoding is non-fatal: when
/// neither the period form, the `HH:MM:SS` form, nor a millisecond
/// integer parses, the result is `Ok(None)` and a debug note is logged.
///
/// # Errors
///
/// Returns `FieldError::Decode` for malformed date and long input.
pub fn decode_value(
    field_type: FieldType,
    pattern: Option<&str>,
    raw: &str,
) -> Result<Option<FieldValue>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match field_type {
        FieldType::Boolean => Ok(Some(FieldValue::Boolean(
            trimmed.eq_ignore_ascii_case("true"),
        ))),

        FieldType::Date => decode_date_like(field_type, pattern, trimmed, false),
        FieldType::StartDate | FieldType::StartTime => {
            decode_date_like(field_type, pattern, trimmed, true)
        }

        FieldType::Duration => Ok(decode_duration_raw(trimmed)),

        FieldType::Long => trimmed
            .parse::<i64>()
            .map(|n| Some(FieldValue::Long(n)))
            .map_err(|_| FieldError::Decode {
                field_type,
                raw: trimmed.to_string(),
            }),

        FieldType::Text | FieldType::TextLong | FieldType::OrderedText => {
            Ok(Some(FieldValue::Text(trimmed.to_string())))
        }

        FieldType::IterableText | FieldType::MixedText => {
            Ok(Some(FieldValue::TextList(vec![trimmed.to_string()])))
        }
    }
}

fn decode_date_like(
    field_type: FieldType,
    pattern: Option<&str>,
    raw: &str,
    accept_period: bool,
) -> Result<Option<FieldValue>, FieldError> {
    // Start fields may arrive as an encoded period; the start bound is
    // the field value.
    if accept_period {
        if let Some(period) = encoding::decode_period_opt(raw) {
            if let Some(start) = period.start() {
                return Ok(Some(FieldValue::Date(start)));
            }
        }
    }

    if let Some(pattern) = pattern {
        if let Some(dt) = parse_with_pattern(raw, pattern) {
            return Ok(Some(FieldValue::Date(dt)));
        }
        return Err(FieldError::Decode {
            field_type,
            raw: raw.to_string(),
        });
    }

    match encoding::decode_date(raw) {
        Ok(dt) => Ok(Some(FieldValue::Date(dt))),
        Err(_) => Err(FieldError::Decode {
            field_type,
            raw: raw.to_string(),
        }),
    }
}

/// Parse a date-like string with a chrono format pattern.
///
/// Datetime, date-only, and time-only patterns are all accepted;
/// missing parts default to midnight and the epoch date.
fn parse_with_pattern(raw: &str, pattern: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, pattern) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    if let Ok(time) = NaiveTime::parse_from_str(raw, pattern) {
        return NaiveDate::from_ymd_opt(1970, 1, 1)
            .map(|date| Utc.from_utc_datetime(&date.and_time(time)));
    }
    None
}

/// Duration raw decode: period text first, `HH:MM:SS` next, millisecond
/// integer last. The probe order is load-bearing backward compatibility.
fn decode_duration_raw(raw: &str) -> Option<FieldValue> {
    if let Some(period) = encoding::decode_period_opt(raw) {
        if let Some(ms) = period.duration_ms() {
            return Some(FieldValue::Duration(ms));
        }
    }
    if let Some(ms) = parse_hms(raw) {
        return Some(FieldValue::Duration(ms));
    }
    if let Ok(ms) = raw.parse::<u64>() {
        return Some(FieldValue::Duration(ms));
    }
    tracing::debug!(raw, "duration text matched no known form; leaving field empty");
    None
}

/// Parse `HH:MM:SS` (or `MM:SS`) to milliseconds.
fn parse_hms(raw: &str) -> Option<u64> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    let mut ms: u64 = 0;
    for part in &parts {
        let n: u64 = part.trim().parse().ok()?;
        ms = ms.checked_mul(60)?.checked_add(n)?;
    }
    ms.checked_mul(1_000)
}

/// Format milliseconds as `HH:MM:SS`.
fn format_hms(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

fn format_date(field_type: FieldType, pattern: Option<&str>, dt: DateTime<Utc>) -> String {
    if let Some(pattern) = pattern {
        return dt.format(pattern).to_string();
    }
    match field_type {
        FieldType::StartTime => dt.format("%H:%M:%S").to_string(),
        _ => encoding::encode_date(dt, Precision::Second).value().to_string(),
    }
}

/// Render the JSON wire value for a field value.
///
/// An unset single value renders as `null`; an unset list renders as an
/// empty array.
pub fn encode_json(
    field_type: FieldType,
    pattern: Option<&str>,
    value: Option<&FieldValue>,
) -> Value {
    match value {
        None => {
            if field_type.is_multi_valued() {
                json!([])
            } else {
                Value::Null
            }
        }
        Some(FieldValue::Boolean(b)) => json!(b),
        Some(FieldValue::Date(dt)) => json!(format_date(field_type, pattern, *dt)),
        Some(FieldValue::Duration(ms)) => json!(format_hms(*ms)),
        Some(FieldValue::Long(n)) => json!(n),
        Some(FieldValue::Text(s)) => json!(s),
        Some(FieldValue::TextList(list)) => json!(list),
    }
}

/// Render the plain display string for a field value.
///
/// Lists join on the given delimiter, falling back to `", "`.
pub fn encode_string(
    field_type: FieldType,
    pattern: Option<&str>,
    delimiter: Option<&str>,
    value: Option<&FieldValue>,
) -> String {
    match value {
        None => String::new(),
        Some(FieldValue::Boolean(b)) => b.to_string(),
        Some(FieldValue::Date(dt)) => format_date(field_type, pattern, *dt),
        Some(FieldValue::Duration(ms)) => format_hms(*ms),
        Some(FieldValue::Long(n)) => n.to_string(),
        Some(FieldValue::Text(s)) => s.clone(),
        Some(FieldValue::TextList(list)) => list.join(delimiter.unwrap_or(", ")),
    }
}

/// Apply raw catalog strings to a field.
///
/// Blank strings are dropped. Multi-valued fields keep every remaining
/// value (splitting on the field's delimiter when one is set); for any
/// other type, when more than one value remains only the last is used
/// and a warning is logged.
///
/// # Errors
///
/// Returns `FieldError::Decode` when the surviving raw value does not
/// decode for the field's type. Duration decoding is non-fatal and
/// never reaches this error.
pub fn apply_raw_values(
    field: &mut MetadataField,
    raw_values: &[String],
) -> Result<(), FieldError> {
    let non_blank: Vec<&str> = raw_values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .collect();

    if non_blank.is_empty() {
        return field.set_value(None);
    }

    if field.field_type().is_multi_valued() {
        let delimiter = field.delimiter().map(str::to_string);
        let mut items = Vec::new();
        for raw in &non_blank {
            match delimiter.as_deref() {
                Some(d) if !d.is_empty() => items.extend(
                    raw.split(d)
                        .map(str::trim)
                        .filter(|part| !part.is_empty())
                        .map(str::to_string),
                ),
                _ => items.push(raw.trim().to_string()),
            }
        }
        return field.set_value(Some(FieldValue::TextList(items)));
    }

    if non_blank.len() > 1 {
        tracing::warn!(
            input_id = field.input_id(),
            field_type = %field.field_type(),
            count = non_blank.len(),
            "multiple values for a single-valued field; keeping the last"
        );
    }
    let raw = non_blank[non_blank.len() - 1];
    let pattern = field.pattern().map(str::to_string);
    let decoded = decode_value(field.field_type(), pattern.as_deref(), raw)?;
    field.set_value(decoded)
}
