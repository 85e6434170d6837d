//! Schedule types: fixed calendar events and the placements produced for tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::task::Task;
use crate::timeline::TimeRange;

/// A fixed commitment on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    name: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl CalendarEvent {
    /// # Errors
    /// Returns [`ValidationError::EmptyName`] for a blank name and
    /// [`ValidationError::InvalidTimeRange`] if the event ends before it starts.
    pub fn new(
        name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName("event".to_string()));
        }
        if end_time < start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            name,
            start_time,
            end_time,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::between(self.start_time, self.end_time)
    }
}

/// Outcome of placing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulingCompleteness {
    NotScheduled,
    PartiallyScheduled,
    CompletelyScheduled,
}

/// A task (or a segment of one) placed at a start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    task: Task,
    start_time: DateTime<Utc>,
    completeness: SchedulingCompleteness,
}

impl ScheduledTask {
    /// A fully placed task.
    pub fn new(task: Task, start_time: DateTime<Utc>) -> Self {
        Self {
            task,
            start_time,
            completeness: SchedulingCompleteness::CompletelyScheduled,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + self.task.duration()
    }

    pub fn completeness(&self) -> SchedulingCompleteness {
        self.completeness
    }

    /// Span occupied by this placement.
    pub fn time_range(&self) -> TimeRange {
        TimeRange::between(self.start_time, self.end_time())
    }

    /// Downgrade after the remaining segments of a split task found no room.
    pub(crate) fn mark_partial(&mut self) {
        self.completeness = SchedulingCompleteness::PartiallyScheduled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 25, hour, minute, 0).unwrap()
    }

    #[test]
    fn event_requires_name() {
        let err = CalendarEvent::new("  ", at(9, 0), at(10, 0)).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName("event".to_string()));
    }

    #[test]
    fn event_requires_ordered_times() {
        assert!(CalendarEvent::new("Standup", at(10, 0), at(9, 0)).is_err());
        assert!(CalendarEvent::new("Marker", at(10, 0), at(10, 0)).is_ok());
    }

    #[test]
    fn event_range() {
        let event = CalendarEvent::new("Standup", at(9, 30), at(10, 0)).unwrap();
        assert_eq!(event.name(), "Standup");
        assert_eq!(event.time_range().duration(), Duration::minutes(30));
    }

    #[test]
    fn completeness_wire_names() {
        assert_eq!(
            serde_json::to_string(&SchedulingCompleteness::PartiallyScheduled).unwrap(),
            "\"PARTIALLY_SCHEDULED\""
        );
    }

    #[test]
    fn scheduled_task_defaults_to_complete() {
        let task = Task::from_minutes("Task", None, 45, 2).unwrap();
        let mut scheduled = ScheduledTask::new(task, at(9, 0));
        assert_eq!(scheduled.completeness(), SchedulingCompleteness::CompletelyScheduled);
        assert_eq!(scheduled.end_time(), at(9, 45));

        scheduled.mark_partial();
        assert_eq!(scheduled.completeness(), SchedulingCompleteness::PartiallyScheduled);
    }
}
