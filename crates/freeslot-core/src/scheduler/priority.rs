//! Highest-Priority-First.
//!
//! Tasks are drained tier by tier, highest priority value first. Placed slots
//! are deleted from the free set. Whenever the tier changes the search
//! restarts at the first free range and at the window start, so each tier
//! gets the earliest gaps left over by the tiers before it.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::error::Result;
use crate::schedule::{CalendarEvent, ScheduledTask};
use crate::task::{Task, TaskOrdering, TaskQueue};
use crate::timeline::CalendarEventsGroup;

/// Place tasks by priority. Output is sorted by start time.
pub fn schedule(
    events: &[CalendarEvent],
    tasks: &[Task],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Result<Vec<ScheduledTask>> {
    let mut free = CalendarEventsGroup::new(events, window_start, window_end)?.free_time_group()?;
    let mut queue = TaskQueue::new(tasks.iter().cloned(), TaskOrdering::PriorityThenDurationThenName);

    let mut snapshot = free.ranges();
    let mut cursor = 0;
    let mut current = window_start;
    let mut scheduled = Vec::with_capacity(queue.len());

    while cursor < snapshot.len() {
        let Some(head) = queue.peek() else {
            break;
        };
        let duration = head.duration();
        let tier = head.priority();
        let range = snapshot[cursor];

        if range.start() > current {
            current = range.start();
        }

        if duration <= range.end() - current {
            let Some(task) = queue.remove() else {
                break;
            };
            trace!(task = task.name(), priority = %tier, start = %current, "placed task");

            let placed = ScheduledTask::new(task, current);
            free.delete_time_range(&placed.time_range());
            current = placed.end_time();
            scheduled.push(placed);

            if queue.peek().is_some_and(|next| next.priority() != tier) {
                trace!(finished_tier = %tier, "tier changed, restarting at window start");
                snapshot = free.ranges();
                cursor = 0;
                current = window_start;
            }
        } else if cursor + 1 == snapshot.len() {
            // Remaining tasks of this tier are at least as long; none can fit.
            let mut dropped = 0;
            while queue.peek().is_some_and(|t| t.priority() == tier) {
                queue.remove();
                dropped += 1;
            }
            trace!(priority = %tier, dropped, "no room left for tier");
            snapshot = free.ranges();
            cursor = 0;
            current = window_start;
        } else {
            cursor += 1;
        }
    }

    scheduled.sort_by_key(ScheduledTask::start_time);

    debug!(
        algorithm = "HIGHEST_PRIORITY_FIRST",
        placed = scheduled.len(),
        skipped = tasks.len() - scheduled.len(),
        "schedule computed"
    );
    Ok(scheduled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 25, hour, minute, 0).unwrap()
    }

    fn task(name: &str, minutes: i64, priority: i64) -> Task {
        Task::from_minutes(name, None, minutes, priority).unwrap()
    }

    fn placements(scheduled: &[ScheduledTask]) -> Vec<(&str, DateTime<Utc>)> {
        scheduled
            .iter()
            .map(|s| (s.task().name(), s.start_time()))
            .collect()
    }

    #[test]
    fn schedules_highest_priority_earliest() {
        let tasks = vec![
            task("Task 1", 30, 1),
            task("Task 2", 30, 2),
            task("Task 3", 30, 3),
            task("Task 4", 30, 4),
            task("Task 5", 30, 5),
        ];
        let scheduled = schedule(&[], &tasks, at(9, 0), at(17, 0)).unwrap();
        assert_eq!(
            placements(&scheduled),
            vec![
                ("Task 5", at(9, 0)),
                ("Task 4", at(9, 30)),
                ("Task 3", at(10, 0)),
                ("Task 2", at(10, 30)),
                ("Task 1", at(11, 0)),
            ]
        );
    }

    #[test]
    fn lower_tier_reclaims_earlier_gap() {
        let events = vec![
            CalendarEvent::new("Event 1", at(9, 20), at(10, 0)).unwrap(),
            CalendarEvent::new("Event 2", at(10, 30), at(17, 0)).unwrap(),
        ];
        let tasks = vec![task("Task 1", 20, 1), task("Task 2", 30, 2)];
        let scheduled = schedule(&events, &tasks, at(9, 0), at(17, 0)).unwrap();
        assert_eq!(
            placements(&scheduled),
            vec![("Task 1", at(9, 0)), ("Task 2", at(10, 0))]
        );
    }

    #[test]
    fn drops_tier_that_cannot_fit() {
        let events = vec![CalendarEvent::new("Event 1", at(10, 0), at(18, 0)).unwrap()];
        let tasks = vec![
            task("Task 1", 30, 1),
            task("Task 2", 30, 2),
            task("Task 3", 20, 4),
            task("Task 4", 45, 3),
        ];
        let scheduled = schedule(&events, &tasks, at(9, 0), at(10, 0)).unwrap();
        assert_eq!(
            placements(&scheduled),
            vec![("Task 3", at(9, 0)), ("Task 2", at(9, 20))]
        );
    }

    #[test]
    fn same_tier_fills_one_range_back_to_back() {
        let tasks = vec![task("b", 30, 3), task("a", 30, 3), task("c", 15, 3)];
        let scheduled = schedule(&[], &tasks, at(9, 0), at(10, 0)).unwrap();
        assert_eq!(
            placements(&scheduled),
            vec![("c", at(9, 0)), ("a", at(9, 15))]
        );
    }

    #[test]
    fn event_outside_window_is_ignored() {
        let events = vec![CalendarEvent::new("Evening", at(18, 0), at(20, 0)).unwrap()];
        let scheduled = schedule(&events, &[task("Task 1", 30, 1)], at(9, 0), at(17, 0)).unwrap();
        assert_eq!(placements(&scheduled), vec![("Task 1", at(9, 0))]);
    }

    #[test]
    fn event_partially_outside_window() {
        let events = vec![CalendarEvent::new("Early", at(8, 30), at(9, 30)).unwrap()];
        let scheduled = schedule(&events, &[task("Task 1", 30, 1)], at(9, 0), at(17, 0)).unwrap();
        assert_eq!(placements(&scheduled), vec![("Task 1", at(9, 30))]);
    }

    #[test]
    fn oversized_task_is_dropped_with_its_tier() {
        let tasks = vec![task("Huge", 1_000_000_000_000, 5), task("Task 1", 30, 1)];
        let scheduled = schedule(&[], &tasks, at(9, 0), at(17, 0)).unwrap();
        assert_eq!(placements(&scheduled), vec![("Task 1", at(9, 0))]);
    }

    #[test]
    fn zero_length_event_does_not_split_free_time() {
        let events = vec![CalendarEvent::new("Marker", at(9, 30), at(9, 30)).unwrap()];
        let scheduled = schedule(&events, &[task("Task 1", 60, 1)], at(9, 0), at(17, 0)).unwrap();
        assert_eq!(placements(&scheduled), vec![("Task 1", at(9, 0))]);
    }

    #[test]
    fn no_free_time_schedules_nothing() {
        let events = vec![CalendarEvent::new("All day", at(8, 0), at(18, 0)).unwrap()];
        let scheduled = schedule(&events, &[task("Task 1", 30, 5)], at(9, 0), at(17, 0)).unwrap();
        assert!(scheduled.is_empty());
    }
}
