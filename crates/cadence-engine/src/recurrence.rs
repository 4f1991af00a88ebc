//! Weekly recurrence counting -- how many occurrences of a meeting template
//! fit into a date range without being blocked.
//!
//! One scan drives both counters: the cursor snaps forward to the template's
//! weekday, then steps in 7-day strides through the range, asking a
//! [`ConflictPolicy`] whether each candidate date is blocked. The policies
//! differ only in that per-date predicate.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::day::DaySchedule;
use crate::interval::Interval;

/// A request to count the schedulable occurrences of a weekly meeting.
///
/// `template` must be date-less; its weekday and minute range describe the
/// recurring slot. The range is inclusive at both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub template: Interval,
}

/// How an occurrence gets blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Blocked iff some booked interval on that date overlaps the template.
    /// Day-off flags are ignored.
    Schedule,
    /// Blocked iff the date is flagged as a day off. Booked intervals are
    /// ignored.
    DaysOff,
}

impl ConflictPolicy {
    fn blocks(self, day: &DaySchedule, template: &Interval) -> bool {
        match self {
            ConflictPolicy::Schedule => day.find_conflict(template).is_some(),
            ConflictPolicy::DaysOff => day.is_day_off(),
        }
    }
}

/// Count the occurrences of `request.template` within the request's date
/// range that `policy` does not block.
///
/// A date with no registered schedule always counts: absence means free.
/// A request whose `start_date` is after its `end_date` yields 0 by policy
/// (the scan never starts), not an error.
pub fn count_occurrences(
    calendar: &Calendar,
    request: &MeetingRequest,
    policy: ConflictPolicy,
) -> u32 {
    let template = &request.template;

    // Snap the cursor forward to the first date on the template's weekday;
    // the offset is 0..=6 days regardless of input.
    let start_weekday = request.start_date.weekday().number_from_sunday();
    let offset = (template.weekday() + 7 - start_weekday) % 7;
    let mut cursor = request.start_date + Days::new(offset as u64);

    let mut occurrences = 0;
    while cursor <= request.end_date {
        let blocked = match calendar.day(template.weekday(), cursor) {
            Some(day) => policy.blocks(day, template),
            None => false,
        };
        if !blocked {
            occurrences += 1;
        }
        cursor = cursor + Days::new(7);
    }
    occurrences
}

impl Calendar {
    /// Occurrence count under [`ConflictPolicy::Schedule`].
    pub fn count_occurrences_schedule(&self, request: &MeetingRequest) -> u32 {
        count_occurrences(self, request, ConflictPolicy::Schedule)
    }

    /// Occurrence count under [`ConflictPolicy::DaysOff`].
    pub fn count_occurrences_days_off(&self, request: &MeetingRequest) -> u32 {
        count_occurrences(self, request, ConflictPolicy::DaysOff)
    }
}
