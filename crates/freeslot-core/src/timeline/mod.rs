//! Timeline primitives.
//!
//! This module provides:
//! - Inclusive time ranges
//! - An interval set that keeps ranges sorted and disjoint
//! - Free-time extraction between calendar events

mod gap;
mod group;
mod range;

pub use gap::CalendarEventsGroup;
pub use group::{TimeRangeGroup, TimeRangeSet};
pub use range::TimeRange;
