//! # Freeslot Core Library
//!
//! This library fits flexible tasks into the free time left between fixed
//! calendar events. It implements a CLI-first philosophy: all operations are
//! available through the standalone `freeslot-cli` binary, which is a thin
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Timeline**: interval arithmetic and free-time extraction
//! - **Task**: validated task values and strategy-specific queues
//! - **Scheduler**: the Shortest-Task-First, Highest-Priority-First and
//!   Longest-Task-First strategies
//! - **Storage**: TOML-based configuration
//! - **Request**: the camelCase JSON wire format
//!
//! ## Key Components
//!
//! - [`TimeRangeGroup`]: sorted, disjoint interval set
//! - [`CalendarEventsGroup`]: free-time extractor
//! - [`SchedulingAlgorithm`]: strategy selection and dispatch
//! - [`Config`]: Application configuration management

pub mod error;
pub mod request;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod task;
pub mod timeline;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use request::{
    EventPayload, FreeRangePayload, ScheduleRequest, ScheduledTaskPayload, TaskPayload,
};
pub use schedule::{CalendarEvent, ScheduledTask, SchedulingCompleteness};
pub use scheduler::SchedulingAlgorithm;
pub use storage::Config;
pub use task::{Task, TaskOrdering, TaskPriority, TaskQueue};
pub use timeline::{CalendarEventsGroup, TimeRange, TimeRangeGroup, TimeRangeSet};
