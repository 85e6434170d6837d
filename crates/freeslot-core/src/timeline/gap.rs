//! Free-time extraction between calendar events.
//!
//! Finds the spans inside a working window that no event covers. The result
//! is sorted and disjoint, so it can be consumed directly or wrapped in a
//! [`TimeRangeGroup`] when slots have to be removed as tasks are placed.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::group::TimeRangeGroup;
use super::range::TimeRange;
use crate::error::{Result, ValidationError};
use crate::schedule::CalendarEvent;

/// Calendar events of one day together with the window they are read against.
#[derive(Debug, Clone)]
pub struct CalendarEventsGroup {
    // sorted by start time
    events: Vec<CalendarEvent>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
}

impl CalendarEventsGroup {
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeRange`] if `window_start` is after
    /// `window_end`.
    pub fn new(
        events: &[CalendarEvent],
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if window_start > window_end {
            return Err(ValidationError::InvalidTimeRange {
                start: window_start,
                end: window_end,
            });
        }

        let mut events = events.to_vec();
        events.sort_by_key(|e| e.start_time());

        Ok(Self {
            events,
            window_start,
            window_end,
        })
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Add one more event, keeping start order.
    pub fn add_event(&mut self, event: CalendarEvent) {
        let idx = self
            .events
            .partition_point(|e| e.start_time() <= event.start_time());
        self.events.insert(idx, event);
    }

    /// Spans of the window that no event covers, in start order.
    ///
    /// Ranges are not merged: a zero-length event inside the window leaves two
    /// touching ranges such as `[09:00, 10:00]` and `[10:00, 17:00]`. Wrap them
    /// with [`Self::free_time_group`] to coalesce them.
    pub fn free_time_ranges(&self) -> Vec<TimeRange> {
        let mut free = Vec::new();
        let mut earliest_free = self.window_start;

        for event in &self.events {
            // Events are sorted, nothing after this one can open a gap in the window.
            if event.start_time() > self.window_end {
                break;
            }

            if event.start_time() > earliest_free {
                free.push(TimeRange::between(earliest_free, event.start_time()));
            }

            if event.end_time() > earliest_free {
                earliest_free = event.end_time();
            }
        }

        if self.window_end > earliest_free {
            free.push(TimeRange::between(earliest_free, self.window_end));
        }

        debug!(
            events = self.events.len(),
            free_ranges = free.len(),
            "extracted free time"
        );
        free
    }

    /// Free ranges wrapped in a group that supports deletion.
    pub fn free_time_group(&self) -> Result<TimeRangeGroup> {
        TimeRangeGroup::new(self.free_time_ranges())
    }
}
