//! Task model: flexible work items waiting to be placed on the day.
//!
//! A [`Task`] is immutable once built. Its [`TaskPriority`] is range-checked
//! at construction so schedulers never see an out-of-range value.

mod queue;

pub use queue::{TaskOrdering, TaskQueue};

use std::fmt;

use chrono::Duration;

use crate::error::ValidationError;

/// Urgency of a task, from 1 (least urgent) to 5 (most urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskPriority(u8);

impl TaskPriority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    /// Returns [`ValidationError::PriorityOutOfRange`] outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::PriorityOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TaskPriority {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of flexible work with a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    name: String,
    description: Option<String>,
    duration: Duration,
    priority: TaskPriority,
}

impl Task {
    /// # Errors
    /// Returns [`ValidationError::NegativeDuration`] for a negative duration.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        duration: Duration,
        priority: TaskPriority,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if duration < Duration::zero() {
            return Err(ValidationError::NegativeDuration { field: name });
        }
        Ok(Self {
            name,
            description,
            duration,
            priority,
        })
    }

    /// Convenience constructor taking whole minutes and a raw priority value.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidValue`] when `minutes` does not fit a
    /// [`Duration`], plus the errors of [`Task::new`] and [`TaskPriority::new`].
    pub fn from_minutes(
        name: impl Into<String>,
        description: Option<String>,
        minutes: i64,
        priority: i64,
    ) -> Result<Self, ValidationError> {
        let duration =
            Duration::try_minutes(minutes).ok_or_else(|| ValidationError::InvalidValue {
                field: "duration".to_string(),
                message: format!("{minutes} minutes is out of range"),
            })?;
        Self::new(name, description, duration, TaskPriority::new(priority)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Copy of this task under another name and duration, used for the
    /// pieces of a task split across several free ranges.
    pub(crate) fn segment(&self, name: String, duration: Duration) -> Task {
        Task {
            name,
            description: self.description.clone(),
            duration,
            priority: self.priority,
        }
    }
}
