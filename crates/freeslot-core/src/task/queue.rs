//! Strategy-specific priority queue over tasks.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Task;

/// Order in which a scheduling strategy consumes tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrdering {
    /// Shortest duration first, ties by name
    DurationThenName,
    /// Highest priority value first, then shortest duration, then name
    PriorityThenDurationThenName,
    /// Longest duration first, ties by name
    LongestThenName,
}

impl TaskOrdering {
    /// `Less` means `a` is consumed before `b`.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::DurationThenName => a
                .duration()
                .cmp(&b.duration())
                .then_with(|| a.name().cmp(b.name())),
            Self::PriorityThenDurationThenName => b
                .priority()
                .cmp(&a.priority())
                .then_with(|| a.duration().cmp(&b.duration()))
                .then_with(|| a.name().cmp(b.name())),
            Self::LongestThenName => b
                .duration()
                .cmp(&a.duration())
                .then_with(|| a.name().cmp(b.name())),
        }
    }

    /// Sort a slice in consumption order.
    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

#[derive(Debug)]
struct QueuedTask {
    task: Task,
    ordering: TaskOrdering,
    // insertion order, keeps equal tasks FIFO
    seq: usize,
}

impl Ord for QueuedTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element, so invert the task ordering.
        self.ordering
            .compare(&other.task, &self.task)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedTask {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedTask {}

/// Tasks ordered by one [`TaskOrdering`]. One queue per scheduling call.
#[derive(Debug)]
pub struct TaskQueue {
    heap: BinaryHeap<QueuedTask>,
}

impl TaskQueue {
    pub fn new<I>(tasks: I, ordering: TaskOrdering) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        let heap = tasks
            .into_iter()
            .enumerate()
            .map(|(seq, task)| QueuedTask {
                task,
                ordering,
                seq,
            })
            .collect();
        Self { heap }
    }

    /// Next task without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.heap.peek().map(|queued| &queued.task)
    }

    /// Remove and return the next task.
    pub fn remove(&mut self) -> Option<Task> {
        self.heap.pop().map(|queued| queued.task)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, minutes: i64, priority: i64) -> Task {
        Task::from_minutes(name, None, minutes, priority).unwrap()
    }

    fn drain(mut queue: TaskQueue) -> Vec<String> {
        let mut names = Vec::new();
        while let Some(task) = queue.remove() {
            names.push(task.name().to_string());
        }
        names
    }

    #[test]
    fn shortest_first_breaks_ties_by_name() {
        let queue = TaskQueue::new(
            vec![
                task("Task 1", 30, 1),
                task("Task 2", 15, 1),
                task("Task 4", 45, 1),
                task("Task 3", 15, 1),
            ],
            TaskOrdering::DurationThenName,
        );
        assert_eq!(drain(queue), vec!["Task 2", "Task 3", "Task 1", "Task 4"]);
    }

    #[test]
    fn priority_first_then_duration_then_name() {
        let queue = TaskQueue::new(
            vec![
                task("b", 30, 3),
                task("low", 10, 1),
                task("a", 30, 3),
                task("quick", 5, 3),
                task("urgent", 60, 5),
            ],
            TaskOrdering::PriorityThenDurationThenName,
        );
        assert_eq!(drain(queue), vec!["urgent", "quick", "a", "b", "low"]);
    }

    #[test]
    fn longest_first_breaks_ties_by_name() {
        let mut tasks = vec![
            task("Task 1", 30, 1),
            task("Task 2", 15, 1),
            task("Task 3", 20, 1),
            task("Task 4", 45, 1),
            task("Task 0", 30, 1),
        ];
        TaskOrdering::LongestThenName.sort(&mut tasks);
        let names: Vec<_> = tasks.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Task 4", "Task 0", "Task 1", "Task 3", "Task 2"]);
    }

    #[test]
    fn identical_tasks_come_out_in_insertion_order() {
        let queue = TaskQueue::new(
            vec![
                Task::from_minutes("same", Some("first".into()), 10, 2).unwrap(),
                Task::from_minutes("same", Some("second".into()), 10, 2).unwrap(),
            ],
            TaskOrdering::DurationThenName,
        );
        let mut queue = queue;
        assert_eq!(queue.remove().unwrap().description(), Some("first"));
        assert_eq!(queue.remove().unwrap().description(), Some("second"));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = TaskQueue::new(vec![task("only", 10, 1)], TaskOrdering::DurationThenName);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek().map(Task::name), Some("only"));
        assert!(!queue.is_empty());
        assert!(queue.remove().is_some());
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
        assert!(queue.remove().is_none());
    }
}
