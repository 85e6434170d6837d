//! Shortest-Task-First.
//!
//! Tasks are taken shortest first and packed into free ranges in start order.
//! If the shortest remaining task does not fit in a range, no longer task
//! fits there either, so the range is abandoned for good. One linear pass
//! over ranges and tasks.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::error::Result;
use crate::schedule::{CalendarEvent, ScheduledTask};
use crate::task::{Task, TaskOrdering};
use crate::timeline::CalendarEventsGroup;

/// Place tasks shortest first. Tasks that never fit are left out.
pub fn schedule(
    events: &[CalendarEvent],
    tasks: &[Task],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Result<Vec<ScheduledTask>> {
    let free = CalendarEventsGroup::new(events, window_start, window_end)?.free_time_ranges();

    let mut tasks = tasks.to_vec();
    TaskOrdering::DurationThenName.sort(&mut tasks);

    let mut scheduled = Vec::with_capacity(tasks.len());
    let mut range_idx = 0;
    let mut task_idx = 0;
    let mut current = window_start;

    while range_idx < free.len() && task_idx < tasks.len() {
        let range = free[range_idx];
        let task = &tasks[task_idx];

        if range.start() > current {
            current = range.start();
        }

        // Compare spans so an oversized task never builds an out-of-range instant.
        if task.duration() <= range.end() - current {
            trace!(task = task.name(), start = %current, "placed task");
            scheduled.push(ScheduledTask::new(task.clone(), current));
            current = current + task.duration();
            task_idx += 1;
        } else {
            trace!(task = task.name(), range = %range, "task does not fit, moving to next range");
            range_idx += 1;
        }
    }

    debug!(
        algorithm = "SHORTEST_TASK_FIRST",
        placed = scheduled.len(),
        skipped = tasks.len() - scheduled.len(),
        "schedule computed"
    );
    Ok(scheduled)
}
