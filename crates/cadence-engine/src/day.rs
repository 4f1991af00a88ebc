//! Per-date scheduling unit -- one interval tree plus a day-off flag.

use chrono::{Datelike, NaiveDate};

use crate::interval::Interval;
use crate::tree::{self, IntervalTree};

/// The schedule for a single calendar date.
///
/// Holds every interval booked on that date in an [`IntervalTree`], plus a
/// day-off flag. The flag and the tree are independent: a day can be marked
/// off while still holding events, and the flag alone decides day-off
/// semantics.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    date: NaiveDate,
    weekday: u32,
    day_off: bool,
    tree: IntervalTree,
}

impl DaySchedule {
    /// Create an empty schedule for `date`. The weekday is derived from the
    /// date itself (1 = Sunday .. 7 = Saturday) so the two can never disagree.
    pub fn new(date: NaiveDate, day_off: bool) -> Self {
        Self {
            date,
            weekday: date.weekday().number_from_sunday(),
            day_off,
            tree: IntervalTree::new(),
        }
    }

    /// Book an interval on this date.
    pub fn add_event(&mut self, interval: Interval) {
        self.tree.insert(interval);
    }

    /// Some booked interval overlapping `query`, or `None` if the slot is free.
    pub fn find_conflict(&self, query: &Interval) -> Option<&Interval> {
        self.tree.overlap_search(query)
    }

    pub fn is_day_off(&self) -> bool {
        self.day_off
    }

    pub(crate) fn set_day_off(&mut self, day_off: bool) {
        self.day_off = day_off;
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Weekday of this date, 1 = Sunday .. 7 = Saturday.
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// Number of booked intervals.
    pub fn event_count(&self) -> usize {
        self.tree.len()
    }

    /// Booked intervals in ascending start-minute order.
    pub fn events(&self) -> tree::Iter<'_> {
        self.tree.iter()
    }
}
