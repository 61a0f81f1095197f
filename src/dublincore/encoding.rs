//! dublincore::encoding
//!
//! Text codec for temporal property values.
//!
//! Dates and periods use the W3C-DTF profile of ISO 8601; durations use
//! ISO 8601 duration text. Encoded values carry the matching encoding
//! scheme so decoders can dispatch without guessing.
//!
//! # Mandatory vs optional decodes
//!
//! Mandatory decodes (`decode_date`, `decode_period`, `decode_duration`)
//! fail with [`DecodeError`] on blank or malformed input. Optional
//! decodes (`decode_date_opt`, ...) return `None` instead, for call
//! sites that treat the property as absent.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use mediameta::dublincore::{encoding, Precision};
//!
//! let dt = Utc.with_ymd_and_hms(2020, 5, 17, 14, 30, 45).unwrap();
//!
//! let day = encoding::encode_date(dt, Precision::Day);
//! assert_eq!(day.value(), "2020-05-17");
//!
//! let second = encoding::encode_date(dt, Precision::Second);
//! assert_eq!(second.value(), "2020-05-17T14:30:45Z");
//! assert_eq!(encoding::decode_date(second.value()).unwrap(), dt);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use thiserror::Error;

use super::temporal::{Period, Precision, Temporal, TemporalError};
use super::value::DublinCoreValue;
use super::vocab;

/// Errors from mandatory temporal decodes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("blank input where a value is required")]
    Blank,

    #[error("malformed W3C-DTF date: '{0}'")]
    MalformedDate(String),

    #[error("malformed DCMI period: '{0}'")]
    MalformedPeriod(String),

    #[error("malformed duration: '{0}'")]
    MalformedDuration(String),

    #[error(transparent)]
    InvalidPeriod(#[from] TemporalError),
}

/// Truncate an instant to the given precision.
///
/// This is the exact instant an encode-then-decode round trip recovers.
pub fn truncate(dt: DateTime<Utc>, precision: Precision) -> DateTime<Utc> {
    let date = dt.date_naive();
    let truncated = match precision {
        Precision::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).and_then(midnight),
        Precision::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).and_then(midnight),
        Precision::Day => midnight(date),
        Precision::Minute => date.and_hms_opt(dt.hour(), dt.minute(), 0),
        Precision::Second => date.and_hms_opt(dt.hour(), dt.minute(), dt.second()),
        Precision::Fraction => {
            let millis = dt.timestamp_subsec_millis();
            date.and_hms_milli_opt(dt.hour(), dt.minute(), dt.second(), millis)
        }
    };
    truncated
        .map(|n| Utc.from_utc_datetime(&n))
        .unwrap_or(dt)
}

fn midnight(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
}

/// Encode an instant at the given precision.
///
/// The instant is truncated to the precision and formatted per W3C-DTF;
/// the returned value is tagged with the `dcterms:W3CDTF` scheme.
pub fn encode_date(dt: DateTime<Utc>, precision: Precision) -> DublinCoreValue {
    let dt = truncate(dt, precision);
    let text = match precision {
        Precision::Year => dt.format("%Y").to_string(),
        Precision::Month => dt.format("%Y-%m").to_string(),
        Precision::Day => dt.format("%Y-%m-%d").to_string(),
        Precision::Minute => dt.format("%Y-%m-%dT%H:%MZ").to_string(),
        Precision::Second => dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        Precision::Fraction => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
    };
    DublinCoreValue::with_scheme(text, vocab::scheme_w3cdtf())
}

/// Decode a W3C-DTF date at any recognized precision.
///
/// Recognized forms, most precise first: RFC 3339 with seconds or
/// fractional seconds (`Z` or numeric offset), minute precision, day,
/// month, year.
///
/// # Errors
///
/// Returns `DecodeError::Blank` for blank input and
/// `DecodeError::MalformedDate` when no precision pattern matches.
pub fn decode_date(text: &str) -> Result<DateTime<Utc>, DecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DecodeError::Blank);
    }

    // Second / fraction precision, with 'Z' or numeric offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Minute precision
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%MZ") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    // Day precision
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = midnight(date) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    // Month precision
    if text.len() == 7 && text.as_bytes()[4] == b'-' {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
            if let Some(naive) = midnight(date) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }
    }

    // Year precision
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(year) = text.parse::<i32>() {
            if let Some(naive) = NaiveDate::from_ymd_opt(year, 1, 1).and_then(midnight) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }
    }

    Err(DecodeError::MalformedDate(text.to_string()))
}

/// Optional date decode: blank or malformed input yields `None`.
pub fn decode_date_opt(text: &str) -> Option<DateTime<Utc>> {
    decode_date(text).ok()
}

/// Encode a period as a DCMI period string.
///
/// Bounds are formatted at the given precision; an absent bound is
/// omitted. The returned value is tagged with the `dcterms:Period`
/// scheme.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mediameta::dublincore::{encoding, Period, Precision};
///
/// let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap();
/// let period = Period::new(Some(start), Some(end)).unwrap();
///
/// let encoded = encoding::encode_period(&period, Precision::Second);
/// assert_eq!(
///     encoded.value(),
///     "start=2020-01-01T00:00:00Z; end=2020-01-01T01:00:00Z; scheme=W3C-DTF;"
/// );
/// ```
pub fn encode_period(period: &Period, precision: Precision) -> DublinCoreValue {
    let mut text = String::new();
    if let Some(start) = period.start() {
        text.push_str("start=");
        text.push_str(encode_date(start, precision).value());
        text.push_str("; ");
    }
    if let Some(end) = period.end() {
        text.push_str("end=");
        text.push_str(encode_date(end, precision).value());
        text.push_str("; ");
    }
    text.push_str("scheme=W3C-DTF;");
    DublinCoreValue::with_scheme(text, vocab::scheme_period())
}

/// Decode a DCMI period string.
///
/// Tolerates a period with only a start or only an end; fails only if
/// neither bound parses as a W3C-DTF date.
///
/// # Errors
///
/// Returns `DecodeError::Blank` for blank input,
/// `DecodeError::MalformedPeriod` when neither bound parses, and
/// `DecodeError::InvalidPeriod` when the parsed bounds are inverted.
pub fn decode_period(text: &str) -> Result<Period, DecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Blank);
    }

    let mut start = None;
    let mut end = None;
    for segment in trimmed.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if let Some((key, value)) = segment.split_once('=') {
            match key.trim() {
                "start" => start = decode_date_opt(value),
                "end" => end = decode_date_opt(value),
                // scheme and unknown keys are tolerated
                _ => {}
            }
        }
    }

    if start.is_none() && end.is_none() {
        return Err(DecodeError::MalformedPeriod(trimmed.to_string()));
    }
    Ok(Period::new(start, end)?)
}

/// Optional period decode: blank or malformed input yields `None`.
pub fn decode_period_opt(text: &str) -> Option<Period> {
    decode_period(text).ok()
}

/// Encode a millisecond count as ISO 8601 duration text.
///
/// Lossless at millisecond resolution; the returned value is tagged with
/// the `dcterms:ISO8601` scheme.
///
/// # Example
///
/// ```
/// use mediameta::dublincore::encoding;
///
/// assert_eq!(encoding::encode_duration(3_723_000).value(), "PT1H2M3S");
/// assert_eq!(encoding::encode_duration(1_500).value(), "PT0H0M1.500S");
/// assert_eq!(encoding::decode_duration("PT1H2M3S").unwrap(), 3_723_000);
/// ```
pub fn encode_duration(ms: u64) -> DublinCoreValue {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    let text = if millis == 0 {
        format!("PT{hours}H{minutes}M{seconds}S")
    } else {
        format!("PT{hours}H{minutes}M{seconds}.{millis:03}S")
    };
    DublinCoreValue::with_scheme(text, vocab::scheme_iso8601())
}

/// Decode a duration.
///
/// ISO 8601 duration text is tried first; a plain millisecond integer
/// string is accepted as a fallback. The dual format is deliberate
/// backward compatibility with existing wire data.
///
/// # Errors
///
/// Returns `DecodeError::Blank` for blank input and
/// `DecodeError::MalformedDuration` when neither form parses.
pub fn decode_duration(text: &str) -> Result<u64, DecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DecodeError::Blank);
    }

    if text.starts_with('P') {
        return parse_iso_duration(text)
            .ok_or_else(|| DecodeError::MalformedDuration(text.to_string()));
    }

    text.parse::<u64>()
        .map_err(|_| DecodeError::MalformedDuration(text.to_string()))
}

/// Optional duration decode: blank or malformed input yields `None`.
pub fn decode_duration_opt(text: &str) -> Option<u64> {
    decode_duration(text).ok()
}

/// Parse `P[nD][T[nH][nM][n[.fff]S]]` to milliseconds.
///
/// Years and months are rejected: they have no fixed length.
fn parse_iso_duration(text: &str) -> Option<u64> {
    let rest = text.strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let mut ms: u64 = 0;
    let mut components = 0;

    let mut num = String::new();
    for c in date_part.chars() {
        if c.is_ascii_digit() {
            num.push(c);
        } else if c == 'D' && !num.is_empty() {
            ms = ms.checked_add(num.parse::<u64>().ok()?.checked_mul(86_400_000)?)?;
            num.clear();
            components += 1;
        } else {
            return None;
        }
    }
    if !num.is_empty() {
        return None;
    }

    if let Some(time_part) = time_part {
        if time_part.is_empty() {
            return None;
        }
        let mut num = String::new();
        for c in time_part.chars() {
            if c.is_ascii_digit() || c == '.' {
                num.push(c);
            } else if num.is_empty() {
                return None;
            } else if c == 'S' {
                let seconds: f64 = num.parse().ok()?;
                if !seconds.is_finite() || seconds < 0.0 {
                    return None;
                }
                ms = ms.checked_add((seconds * 1000.0).round() as u64)?;
                num.clear();
                components += 1;
            } else {
                let unit_ms: u64 = match c {
                    'H' => 3_600_000,
                    'M' => 60_000,
                    _ => return None,
                };
                if num.contains('.') {
                    return None;
                }
                ms = ms.checked_add(num.parse::<u64>().ok()?.checked_mul(unit_ms)?)?;
                num.clear();
                components += 1;
            }
        }
        if !num.is_empty() {
            return None;
        }
    }

    if components == 0 {
        return None;
    }
    Some(ms)
}

/// Decode a value into its temporal shape.
///
/// When the value carries an encoding scheme, decoding dispatches on it.
/// Untagged values are probed in the fixed order period, then date, then
/// duration.
pub fn decode_temporal(value: &DublinCoreValue) -> Result<Temporal, DecodeError> {
    let text = value.value();
    if let Some(scheme) = value.encoding_scheme() {
        if *scheme == vocab::scheme_period() {
            return decode_period(text).map(Temporal::Period);
        }
        if *scheme == vocab::scheme_iso8601() {
            return decode_duration(text).map(Temporal::Duration);
        }
        if *scheme == vocab::scheme_w3cdtf() {
            return decode_date(text).map(Temporal::Instant);
        }
    }

    if let Ok(period) = decode_period(text) {
        return Ok(Temporal::Period(period));
    }
    if let Ok(date) = decode_date(text) {
        return Ok(Temporal::Instant(date));
    }
    decode_duration(text).map(Temporal::Duration)
}
