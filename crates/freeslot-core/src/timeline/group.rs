//! Interval set of pairwise-disjoint, start-sorted time ranges.

use chrono::Duration;
use tracing::trace;

use super::range::TimeRange;
use crate::error::Result;

/// Operations shared by collections of disjoint time ranges.
pub trait TimeRangeSet {
    /// Insert a range, merging it with every range it overlaps.
    fn add_time_range(&mut self, range: TimeRange) -> Result<()>;

    /// Remove a span of time, splitting ranges that only partly overlap it.
    fn delete_time_range(&mut self, range: &TimeRange);

    /// Whether one member range contains `range` entirely.
    fn has_time_range(&self, range: &TimeRange) -> bool;

    /// Snapshot of the member ranges in start order.
    fn ranges(&self) -> Vec<TimeRange>;
}

/// Sorted, non-overlapping time ranges.
///
/// Invariants held after every public call:
/// - ranges are sorted ascending by start
/// - no two ranges overlap (touching counts as overlapping, see
///   [`TimeRange::overlaps`])
///
/// Mutations rebuild the backing vector in a single linear pass instead of
/// editing it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRangeGroup {
    ranges: Vec<TimeRange>,
}

impl TimeRangeGroup {
    /// Build a group by inserting every range through [`Self::add_time_range`].
    pub fn new<I>(ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = TimeRange>,
    {
        let mut group = Self::default();
        for range in ranges {
            group.add_time_range(range)?;
        }
        Ok(group)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Borrowing iterator in start order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeRange> {
        self.ranges.iter()
    }

    /// Sum of all member durations.
    pub fn total_duration(&self) -> Duration {
        self.ranges
            .iter()
            .fold(Duration::zero(), |acc, r| acc + r.duration())
    }

    /// Insert a range, merging it with every range it overlaps.
    ///
    /// Empty ranges carry no time and are ignored.
    ///
    /// # Errors
    /// Returns [`crate::CoreError::Invariant`] only if the group was already
    /// corrupted.
    pub fn add_time_range(&mut self, range: TimeRange) -> Result<()> {
        if range.is_empty() {
            return Ok(());
        }

        let mut rebuilt = Vec::with_capacity(self.ranges.len() + 1);
        let mut candidate = range;

        for current in &self.ranges {
            if candidate.contains(current) {
                continue;
            }

            if candidate.overlaps(current) {
                candidate = TimeRange::merge(current, &candidate)?;
            } else if current.end() > candidate.end() {
                rebuilt.push(candidate);
                candidate = *current;
            } else {
                rebuilt.push(*current);
            }
        }
        rebuilt.push(candidate);

        trace!(added = %range, before = self.ranges.len(), after = rebuilt.len(), "time range added");
        self.ranges = rebuilt;
        Ok(())
    }

    /// Remove `target` from the group.
    ///
    /// Every overlapping range is replaced by what is left of it before and
    /// after `target`. Deleting time that is not in the group is a no-op, and
    /// so is deleting an empty range.
    pub fn delete_time_range(&mut self, target: &TimeRange) {
        if target.is_empty() {
            return;
        }

        let mut rebuilt = Vec::with_capacity(self.ranges.len() + 1);
        for current in &self.ranges {
            if !current.overlaps(target) {
                rebuilt.push(*current);
                continue;
            }
            if current.start() < target.start() {
                rebuilt.push(TimeRange::between(current.start(), target.start()));
            }
            if current.end() > target.end() {
                rebuilt.push(TimeRange::between(target.end(), current.end()));
            }
        }

        trace!(deleted = %target, before = self.ranges.len(), after = rebuilt.len(), "time range deleted");
        self.ranges = rebuilt;
    }

    /// Whether some member range contains `target`.
    ///
    /// Binary search over starts; only the last range starting at or before
    /// `target` can contain it because members are sorted and disjoint.
    pub fn has_time_range(&self, target: &TimeRange) -> bool {
        let idx = self.ranges.partition_point(|r| r.start() <= target.start());
        idx > 0 && self.ranges[idx - 1].contains(target)
    }

    /// Snapshot of the member ranges in start order.
    pub fn ranges(&self) -> Vec<TimeRange> {
        self.ranges.clone()
    }
}

impl TimeRangeSet for TimeRangeGroup {
    fn add_time_range(&mut self, range: TimeRange) -> Result<()> {
        TimeRangeGroup::add_time_range(self, range)
    }

    fn delete_time_range(&mut self, range: &TimeRange) {
        TimeRangeGroup::delete_time_range(self, range)
    }

    fn has_time_range(&self, range: &TimeRange) -> bool {
        TimeRangeGroup::has_time_range(self, range)
    }

    fn ranges(&self) -> Vec<TimeRange> {
        TimeRangeGroup::ranges(self)
    }
}

impl<'a> IntoIterator for &'a TimeRangeGroup {
    type Item = &'a TimeRange;
    type IntoIter = std::slice::Iter<'a, TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
