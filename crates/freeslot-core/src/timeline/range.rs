//! Immutable time interval with inclusive boundaries.
//!
//! A [`TimeRange`] covers `[start, start + duration]`. Both endpoints count as
//! inside the range for containment and overlap queries, so two ranges that
//! only touch at a single instant are reported as overlapping. Interval sets
//! rely on this to coalesce adjacent free blocks.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::error::{CoreError, ValidationError};

/// A span of time starting at `start` and lasting `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: DateTime<Utc>,
    duration: Duration,
}

impl TimeRange {
    /// Create a range from its two endpoints.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeRange`] if `end` is before `start`.
    pub fn from_start_end(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self {
            start,
            duration: end - start,
        })
    }

    /// Create a range from a start instant and a non-negative duration.
    ///
    /// # Errors
    /// Returns [`ValidationError::NegativeDuration`] for a negative duration.
    pub fn from_start_duration(start: DateTime<Utc>, duration: Duration) -> Result<Self, ValidationError> {
        if duration < Duration::zero() {
            return Err(ValidationError::NegativeDuration {
                field: "time range".to_string(),
            });
        }
        Ok(Self { start, duration })
    }

    /// Range between two instants the caller has already ordered.
    pub(crate) fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start <= end, "between() called with end before start");
        Self {
            start,
            duration: end - start,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Closing instant, `start + duration`.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.duration.is_zero()
    }

    /// Whether `instant` lies within `[start, end]`.
    ///
    /// A zero-length range contains nothing.
    pub fn contains_instant(&self, instant: DateTime<Utc>) -> bool {
        self.duration > Duration::zero() && self.start <= instant && instant <= self.end()
    }

    /// Whether `other` lies entirely within this range.
    ///
    /// A zero-length `other` degenerates to point containment of its start.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if other.is_empty() {
            return self.contains_instant(other.start);
        }
        self.contains_instant(other.start) && self.contains_instant(other.end())
    }

    /// Whether the start of either range lies inside the other.
    ///
    /// Touching ranges (`a.end() == b.start()`) overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains_instant(other.start) || other.contains_instant(self.start)
    }

    /// Span two overlapping ranges into one.
    ///
    /// # Errors
    /// Returns [`CoreError::Invariant`] if the ranges do not overlap; callers
    /// only merge ranges they have already checked.
    pub(crate) fn merge(a: &TimeRange, b: &TimeRange) -> Result<TimeRange, CoreError> {
        if !a.overlaps(b) {
            return Err(CoreError::Invariant(format!(
                "merging two time ranges that do not overlap: {a} and {b}"
            )));
        }
        let start = a.start.min(b.start);
        let end = a.end().max(b.end());
        Ok(TimeRange {
            start,
            duration: end - start,
        })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range: [{}, {}]",
            self.start.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.end().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        )
    }
}
