//! Per-user calendar -- weekday-bucketed storage of day schedules.
//!
//! A [`Calendar`] owns seven maps, one per weekday, each keyed by the concrete
//! [`NaiveDate`]. Day schedules are created lazily on first booking and never
//! removed. The structure is single-threaded and exclusively owned; an
//! integrator sharing one calendar across threads must add its own
//! synchronization around it.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::day::DaySchedule;
use crate::error::{Result, ScheduleError};
use crate::interval::Interval;

/// One user's calendar: a day-off register and an event schedule in a single
/// storage model, queried under either conflict policy.
#[derive(Debug, Clone)]
pub struct Calendar {
    user: String,
    /// Index 0 = Sunday .. index 6 = Saturday.
    buckets: [HashMap<NaiveDate, DaySchedule>; 7],
}

impl Calendar {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            buckets: Default::default(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// The schedule registered for `(weekday, date)`, if any.
    ///
    /// Absence is not an error: a date with no schedule has nothing booked.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidWeekday`] if `weekday` is outside 1..=7.
    pub fn lookup(&self, weekday: u32, date: NaiveDate) -> Result<Option<&DaySchedule>> {
        Ok(self.bucket(weekday)?.get(&date))
    }

    /// Register a pre-built day schedule under its own date and weekday.
    /// Replaces any schedule previously registered for that date.
    pub fn add_day(&mut self, day: DaySchedule) {
        // DaySchedule derives its weekday from the date, so the bucket index
        // is always in range.
        self.buckets[day.weekday() as usize - 1].insert(day.date(), day);
    }

    /// Register a day schedule with its day-off flag forced on.
    pub fn add_day_off(&mut self, mut day: DaySchedule) {
        day.set_day_off(true);
        self.add_day(day);
    }

    /// Book an event on its date, creating the day schedule on first use.
    ///
    /// # Errors
    /// Returns [`ScheduleError::MissingDate`] if `interval` is a date-less
    /// template, and [`ScheduleError::InvalidWeekday`] if its weekday does not
    /// index a bucket.
    pub fn add_event(&mut self, interval: Interval) -> Result<()> {
        let date = interval
            .date()
            .ok_or_else(|| ScheduleError::MissingDate(interval.name().to_string()))?;
        let weekday = interval.weekday();

        self.bucket_mut(weekday)?
            .entry(date)
            .or_insert_with(|| DaySchedule::new(date, false))
            .add_event(interval);
        Ok(())
    }

    /// Infallible lookup for callers holding an already-validated weekday
    /// (every constructed `Interval` carries one).
    pub(crate) fn day(&self, weekday: u32, date: NaiveDate) -> Option<&DaySchedule> {
        self.bucket(weekday).ok()?.get(&date)
    }

    fn bucket(&self, weekday: u32) -> Result<&HashMap<NaiveDate, DaySchedule>> {
        self.buckets
            .get(weekday.wrapping_sub(1) as usize)
            .ok_or(ScheduleError::InvalidWeekday(weekday))
    }

    fn bucket_mut(&mut self, weekday: u32) -> Result<&mut HashMap<NaiveDate, DaySchedule>> {
        self.buckets
            .get_mut(weekday.wrapping_sub(1) as usize)
            .ok_or(ScheduleError::InvalidWeekday(weekday))
    }
}
