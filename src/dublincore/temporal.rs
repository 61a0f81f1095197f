//! dublincore::temporal
//!
//! Temporal values: instants, periods, and durations.
//!
//! # Types
//!
//! - [`Temporal`] - Sum of the three temporal shapes a property can carry
//! - [`Period`] - Interval with an optional start and/or end instant
//! - [`Precision`] - W3C-DTF precision a date is encoded at
//!
//! # Validation
//!
//! Temporal values are constructed only through validated factories: a
//! period needs at least one bound and ordered bounds; a duration is a
//! `u64` millisecond count, so non-negativity holds by construction.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from temporal value construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("period must have a start or an end")]
    UnboundedPeriod,

    #[error("period end {end} precedes start {start}")]
    InvertedPeriod {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// The precision a W3C-DTF date is encoded at.
///
/// Decoding recognizes every precision; encoding truncates the instant
/// to the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Year,
    Month,
    Day,
    Minute,
    Second,
    Fraction,
}

/// A time interval described by an optional start and/or end instant.
///
/// At least one bound is always present; when both are, the end does not
/// precede the start.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mediameta::dublincore::Period;
///
/// let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap();
///
/// let period = Period::new(Some(start), Some(end)).unwrap();
/// assert_eq!(period.duration_ms(), Some(3_600_000));
///
/// // Open-ended intervals keep a single bound
/// let open = Period::new(Some(start), None).unwrap();
/// assert_eq!(open.duration_ms(), None);
///
/// // A period with neither bound cannot be represented
/// assert!(Period::new(None, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl Period {
    /// Create a validated period.
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::UnboundedPeriod` if both bounds are absent,
    /// or `TemporalError::InvertedPeriod` if the end precedes the start.
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, TemporalError> {
        if start.is_none() && end.is_none() {
            return Err(TemporalError::UnboundedPeriod);
        }
        if let (Some(s), Some(e)) = (start, end) {
            if e < s {
                return Err(TemporalError::InvertedPeriod { start: s, end: e });
            }
        }
        Ok(Self { start, end })
    }

    /// Get the start instant, if bounded below.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    /// Get the end instant, if bounded above.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Check whether both bounds are present.
    pub fn is_closed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Length of the interval in milliseconds, when closed.
    pub fn duration_ms(&self) -> Option<u64> {
        match (self.start, self.end) {
            // Bounds are ordered by construction, so the difference is
            // non-negative.
            (Some(s), Some(e)) => Some((e - s).num_milliseconds() as u64),
            _ => None,
        }
    }
}

/// A temporal property value: an instant, a period, or a duration.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mediameta::dublincore::Temporal;
///
/// let t = Temporal::duration(90_000);
/// match t {
///     Temporal::Duration(ms) => assert_eq!(ms, 90_000),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    /// A single instant.
    Instant(DateTime<Utc>),
    /// An interval with optional bounds.
    Period(Period),
    /// A length of time in milliseconds.
    Duration(u64),
}

impl Temporal {
    /// Create an instant value.
    pub fn instant(at: DateTime<Utc>) -> Self {
        Self::Instant(at)
    }

    /// Create a period value.
    pub fn period(period: Period) -> Self {
        Self::Period(period)
    }

    /// Create a duration value from a millisecond count.
    pub fn duration(ms: u64) -> Self {
        Self::Duration(ms)
    }
}
