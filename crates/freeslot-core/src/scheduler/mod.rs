//! Scheduling strategies.
//!
//! Every strategy takes the day's calendar events, the tasks to place and the
//! working window, and returns the placements it made. Tasks that could not be
//! placed are simply absent from the result.
//!
//! - [`SchedulingAlgorithm::ShortestTaskFirst`]: greedy packing, shortest first
//! - [`SchedulingAlgorithm::HighestPriorityFirst`]: tier by tier, earliest gaps
//!   go to the highest priority
//! - [`SchedulingAlgorithm::LongestTaskFirst`]: longest first, splitting tasks
//!   across gaps

mod longest;
mod priority;
mod shortest;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ValidationError};
use crate::schedule::{CalendarEvent, ScheduledTask};
use crate::task::{Task, TaskOrdering};

/// Selectable scheduling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulingAlgorithm {
    #[default]
    ShortestTaskFirst,
    HighestPriorityFirst,
    LongestTaskFirst,
}

impl SchedulingAlgorithm {
    pub fn all() -> [SchedulingAlgorithm; 3] {
        [
            Self::ShortestTaskFirst,
            Self::HighestPriorityFirst,
            Self::LongestTaskFirst,
        ]
    }

    /// Wire name, e.g. `SHORTEST_TASK_FIRST`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortestTaskFirst => "SHORTEST_TASK_FIRST",
            Self::HighestPriorityFirst => "HIGHEST_PRIORITY_FIRST",
            Self::LongestTaskFirst => "LONGEST_TASK_FIRST",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ShortestTaskFirst => "Fit as many short tasks as possible, shortest first",
            Self::HighestPriorityFirst => "Give the earliest free time to the highest priority tasks",
            Self::LongestTaskFirst => "Place the longest tasks first, splitting them across gaps",
        }
    }

    /// Order in which this strategy consumes tasks.
    pub fn task_ordering(&self) -> TaskOrdering {
        match self {
            Self::ShortestTaskFirst => TaskOrdering::DurationThenName,
            Self::HighestPriorityFirst => TaskOrdering::PriorityThenDurationThenName,
            Self::LongestTaskFirst => TaskOrdering::LongestThenName,
        }
    }

    /// Place `tasks` into the free time that `events` leave in the window.
    ///
    /// # Errors
    /// Fails with a validation error if `window_start` is after `window_end`.
    pub fn schedule(
        &self,
        events: &[CalendarEvent],
        tasks: &[Task],
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<ScheduledTask>> {
        info!(
            algorithm = self.as_str(),
            events = events.len(),
            tasks = tasks.len(),
            %window_start,
            %window_end,
            "scheduling"
        );
        match self {
            Self::ShortestTaskFirst => shortest::schedule(events, tasks, window_start, window_end),
            Self::HighestPriorityFirst => priority::schedule(events, tasks, window_start, window_end),
            Self::LongestTaskFirst => longest::schedule(events, tasks, window_start, window_end),
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulingAlgorithm {
    type Err = ValidationError;

    /// Accepts wire names case-insensitively, with `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::all()
            .into_iter()
            .find(|algorithm| algorithm.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownAlgorithm(s.to_string()))
    }
}
