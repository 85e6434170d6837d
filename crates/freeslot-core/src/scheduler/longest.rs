//! Longest-Task-First with splitting.
//!
//! Tasks are taken longest first. A task that does not fit in the earliest
//! free range is cut into segments that fill free ranges front to back until
//! its whole duration is covered. Segments are named `"<task> (Part k)"`.
//! When free time runs out mid-task, every segment already placed for that
//! task is marked partially scheduled.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::error::Result;
use crate::schedule::{CalendarEvent, ScheduledTask};
use crate::task::{Task, TaskOrdering};
use crate::timeline::{CalendarEventsGroup, TimeRange};

fn part_name(task: &Task, part: usize) -> String {
    format!("{} (Part {})", task.name(), part)
}

/// Place tasks longest first, splitting across free ranges when needed.
pub fn schedule(
    events: &[CalendarEvent],
    tasks: &[Task],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Result<Vec<ScheduledTask>> {
    let mut free = CalendarEventsGroup::new(events, window_start, window_end)?.free_time_group()?;

    let mut tasks = tasks.to_vec();
    TaskOrdering::LongestThenName.sort(&mut tasks);

    let mut scheduled = Vec::with_capacity(tasks.len());

    for task in &tasks {
        if free.is_empty() {
            trace!(task = task.name(), "no free time left");
            continue;
        }

        let first = scheduled.len();
        let mut remaining = task.duration();
        let mut complete = false;

        // Ranges are consumed from the front, so the snapshot stays aligned
        // with what is left in `free`.
        for (idx, range) in free.ranges().into_iter().enumerate() {
            let part = idx + 1;
            if remaining > range.duration() {
                trace!(task = task.name(), part, range = %range, "filling whole range");
                scheduled.push(ScheduledTask::new(
                    task.segment(part_name(task, part), range.duration()),
                    range.start(),
                ));
                remaining = remaining - range.duration();
                free.delete_time_range(&range);
            } else {
                let used = TimeRange::between(range.start(), range.start() + remaining);
                trace!(task = task.name(), part, used = %used, "placing final segment");
                scheduled.push(ScheduledTask::new(
                    task.segment(part_name(task, part), remaining),
                    range.start(),
                ));
                free.delete_time_range(&used);
                complete = true;
                break;
            }
        }

        let segments = &mut scheduled[first..];
        if complete && segments.len() == 1 {
            segments[0] = ScheduledTask::new(task.clone(), segments[0].start_time());
        } else if !complete {
            trace!(task = task.name(), segments = segments.len(), "ran out of free time");
            for segment in segments.iter_mut() {
                segment.mark_partial();
            }
        }
    }

    debug!(
        algorithm = "LONGEST_TASK_FIRST",
        placements = scheduled.len(),
        tasks = tasks.len(),
        "schedule computed"
    );
    Ok(scheduled)
}
