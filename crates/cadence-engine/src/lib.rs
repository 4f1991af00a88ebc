//! # cadence-engine
//!
//! Conflict detection and weekly recurrence counting for per-user calendars.
//!
//! Each calendar date owns an augmented interval tree of booked events, so
//! "does this slot collide with anything on that date" is a single-path tree
//! descent. On top of that sits a recurrence scanner that walks a date range
//! in 7-day strides and counts how many occurrences of a weekly meeting
//! template survive a chosen conflict policy.
//!
//! ## Modules
//!
//! - [`interval`] — the immutable event/template value type
//! - [`tree`] — augmented BST with subtree-max-end bookkeeping
//! - [`day`] — per-date schedule: one tree plus a day-off flag
//! - [`calendar`] — weekday-bucketed, date-keyed storage of day schedules
//! - [`recurrence`] — the two-policy occurrence counter
//! - [`error`] — error types

pub mod calendar;
pub mod day;
pub mod error;
pub mod interval;
pub mod recurrence;
pub mod tree;

pub use calendar::Calendar;
pub use day::DaySchedule;
pub use error::{Result, ScheduleError};
pub use interval::Interval;
pub use recurrence::{count_occurrences, ConflictPolicy, MeetingRequest};
pub use tree::IntervalTree;
