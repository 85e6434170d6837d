//! JSON wire format for scheduling requests and responses.
//!
//! Payload types are plain serde structs in camelCase. They are converted
//! into validated core types before anything is scheduled, so a malformed
//! request fails with a [`ValidationError`] instead of producing a schedule.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::schedule::{CalendarEvent, ScheduledTask, SchedulingCompleteness};
use crate::scheduler::SchedulingAlgorithm;
use crate::storage::Config;
use crate::task::Task;
use crate::timeline::{CalendarEventsGroup, TimeRange};

/// A calendar event as sent by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// A task as sent by clients. `duration` is in whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration: i64,
    pub task_priority: i64,
}

/// A full scheduling request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    pub events: Vec<EventPayload>,
    #[serde(default)]
    pub tasks: Vec<TaskPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_type: Option<String>,
}

/// One placement in a scheduling response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTaskPayload {
    pub task: TaskPayload,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub completeness: SchedulingCompleteness,
}

/// One free range. `duration` is in whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeRangePayload {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: i64,
}

impl TryFrom<&EventPayload> for CalendarEvent {
    type Error = ValidationError;

    fn try_from(payload: &EventPayload) -> Result<Self, Self::Error> {
        CalendarEvent::new(payload.name.clone(), payload.start_time, payload.end_time)
    }
}

impl TryFrom<&TaskPayload> for Task {
    type Error = ValidationError;

    fn try_from(payload: &TaskPayload) -> Result<Self, Self::Error> {
        if payload.name.trim().is_empty() {
            return Err(ValidationError::EmptyName("task".to_string()));
        }
        Task::from_minutes(
            payload.name.clone(),
            payload.description.clone(),
            payload.duration,
            payload.task_priority,
        )
    }
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name().to_string(),
            description: task.description().map(str::to_string),
            duration: task.duration().num_minutes(),
            task_priority: i64::from(task.priority().value()),
        }
    }
}

impl From<&ScheduledTask> for ScheduledTaskPayload {
    fn from(scheduled: &ScheduledTask) -> Self {
        Self {
            task: TaskPayload::from(scheduled.task()),
            start_time: scheduled.start_time(),
            end_time: scheduled.end_time(),
            completeness: scheduled.completeness(),
        }
    }
}

impl From<&TimeRange> for FreeRangePayload {
    fn from(range: &TimeRange) -> Self {
        Self {
            start_time: range.start(),
            end_time: range.end(),
            duration: range.duration().num_minutes(),
        }
    }
}

impl ScheduleRequest {
    /// Parse a request from JSON text.
    ///
    /// # Errors
    /// Returns [`crate::CoreError::Json`] if the text is not a valid request.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// # Errors
    /// Fails on the first invalid event.
    pub fn calendar_events(&self) -> Result<Vec<CalendarEvent>, ValidationError> {
        self.events.iter().map(CalendarEvent::try_from).collect()
    }

    /// # Errors
    /// Fails on the first invalid task.
    pub fn tasks(&self) -> Result<Vec<Task>, ValidationError> {
        self.tasks.iter().map(Task::try_from).collect()
    }

    /// Requested algorithm, or `fallback` when none was named.
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownAlgorithm`] for an unrecognized name.
    pub fn algorithm(&self, fallback: SchedulingAlgorithm) -> Result<SchedulingAlgorithm, ValidationError> {
        match &self.algorithm_type {
            Some(name) => name.parse(),
            None => Ok(fallback),
        }
    }

    /// Day the request is about: the explicit start, else the earliest event,
    /// else today.
    fn day(&self) -> NaiveDate {
        self.start_time
            .or(self.end_time)
            .or_else(|| self.events.iter().map(|e| e.start_time).min())
            .unwrap_or_else(Utc::now)
            .date_naive()
    }

    /// Scheduling window. Missing ends are filled from the configured
    /// working hours on the request's day.
    ///
    /// # Errors
    /// Fails if the working hours are invalid or the window is inverted.
    pub fn window(&self, config: &Config) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => (start, end),
            (start, end) => {
                let (day_start, day_end) = config.working_window(self.day())?;
                (start.unwrap_or(day_start), end.unwrap_or(day_end))
            }
        };
        if start > end {
            return Err(ValidationError::InvalidTimeRange { start, end }.into());
        }
        Ok((start, end))
    }

    /// Validate and schedule the request.
    ///
    /// # Errors
    /// Fails on invalid events, tasks, algorithm name or window.
    pub fn schedule(&self, config: &Config) -> Result<Vec<ScheduledTask>> {
        let algorithm = self.algorithm(config.scheduler.default_algorithm)?;
        let events = self.calendar_events()?;
        let tasks = self.tasks()?;
        let (start, end) = self.window(config)?;
        debug!(%algorithm, %start, %end, "resolved request");
        algorithm.schedule(&events, &tasks, start, end)
    }

    /// Free ranges of the request's window.
    ///
    /// # Errors
    /// Fails on invalid events or window.
    pub fn free_ranges(&self, config: &Config) -> Result<Vec<TimeRange>> {
        let events = self.calendar_events()?;
        let (start, end) = self.window(config)?;
        Ok(CalendarEventsGroup::new(&events, start, end)?.free_time_ranges())
    }
}

/// Serialize any payload list as JSON.
///
/// # Errors
/// Returns [`crate::CoreError::Json`] if serialization fails.
pub fn encode<T: Serialize>(payload: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    Ok(text)
}

/// Wire form of a schedule.
pub fn scheduled_payloads(scheduled: &[ScheduledTask]) -> Vec<ScheduledTaskPayload> {
    scheduled.iter().map(ScheduledTaskPayload::from).collect()
}

/// Wire form of free ranges.
pub fn free_range_payloads(ranges: &[TimeRange]) -> Vec<FreeRangePayload> {
    ranges.iter().map(FreeRangePayload::from).collect()
}
