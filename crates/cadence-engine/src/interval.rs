//! The interval value type -- a named time range on a weekday.
//!
//! An `Interval` plays two roles: bound to a [`NaiveDate`] it is a concrete
//! event stored in a day's tree; without a date it is a weekly-recurring
//! template used only to probe for conflicts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes in a day; `end_minute` may equal this (a meeting ending at midnight).
pub const MINUTES_PER_DAY: u32 = 1440;

/// A named time range on a weekday, optionally bound to a calendar date.
///
/// Weekdays are numbered 1..=7 with 1 = Sunday. Times are stored as absolute
/// minutes of the day (`hour * 60 + minute`). Immutable after construction;
/// all fields are validated up front so downstream code never has to re-check
/// ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    name: String,
    weekday: u32,
    start_minute: u32,
    end_minute: u32,
    date: Option<NaiveDate>,
}

/// Wire form of [`Interval`]. Deserialization funnels through
/// [`Interval::try_from`] so JSON input obeys the same invariants as
/// constructed values.
#[derive(Deserialize)]
struct RawInterval {
    name: String,
    weekday: u32,
    start_minute: u32,
    end_minute: u32,
    date: Option<NaiveDate>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = ScheduleError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::validated(
            raw.name,
            raw.date,
            raw.weekday,
            raw.start_minute,
            raw.end_minute,
        )
    }
}

impl Interval {
    /// Create an interval from hour/minute pairs, normalized to minutes of day.
    ///
    /// `date` is `Some` for a concrete event and `None` for a recurrence
    /// template.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidWeekday`] if `weekday` is outside 1..=7.
    /// Returns [`ScheduleError::InvalidInterval`] if either endpoint exceeds
    /// 1440 minutes or the range would run backwards.
    pub fn new(
        name: impl Into<String>,
        date: Option<NaiveDate>,
        weekday: u32,
        start_hour: u32,
        start_min: u32,
        end_hour: u32,
        end_min: u32,
    ) -> Result<Self> {
        let start_minute = to_minute_of_day(start_hour, start_min)?;
        let end_minute = to_minute_of_day(end_hour, end_min)?;
        Self::validated(name.into(), date, weekday, start_minute, end_minute)
    }

    /// Single validation funnel: both the hour/minute constructors and serde
    /// deserialization end up here, so an `Interval` with an out-of-range
    /// weekday or a backwards minute range cannot exist.
    fn validated(
        name: String,
        date: Option<NaiveDate>,
        weekday: u32,
        start_minute: u32,
        end_minute: u32,
    ) -> Result<Self> {
        if !(1..=7).contains(&weekday) {
            return Err(ScheduleError::InvalidWeekday(weekday));
        }
        if start_minute > MINUTES_PER_DAY || end_minute > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidInterval(format!(
                "time of day out of range: {}..{} (max {} minutes)",
                start_minute, end_minute, MINUTES_PER_DAY
            )));
        }
        if start_minute > end_minute {
            return Err(ScheduleError::InvalidInterval(format!(
                "start minute {} is after end minute {}",
                start_minute, end_minute
            )));
        }

        Ok(Self {
            name,
            weekday,
            start_minute,
            end_minute,
            date,
        })
    }

    /// Create a date-less template interval describing a weekly meeting slot.
    pub fn template(
        name: impl Into<String>,
        weekday: u32,
        start_hour: u32,
        start_min: u32,
        end_hour: u32,
        end_min: u32,
    ) -> Result<Self> {
        Self::new(name, None, weekday, start_hour, start_min, end_hour, end_min)
    }

    /// Whether two intervals share at least one minute.
    ///
    /// This is a closed-interval test: two meetings that touch at an endpoint
    /// (one ends at 13:00, the other starts at 13:00) DO conflict. Symmetric
    /// by construction.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start_minute <= other.end_minute && other.start_minute <= self.end_minute
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Normalize an hour/minute pair to minutes of day without overflow; huge
/// hours become `InvalidInterval` instead of wrapping.
fn to_minute_of_day(hour: u32, minute: u32) -> Result<u32> {
    hour.checked_mul(60)
        .and_then(|m| m.checked_add(minute))
        .ok_or_else(|| {
            ScheduleError::InvalidInterval(format!("time of day out of range: {}:{:02}", hour, minute))
        })
}
