//! Error types for cadence-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid weekday {0}: must be in 1..=7 (1 = Sunday)")]
    InvalidWeekday(u32),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Event \"{0}\" has no date and cannot be placed on a calendar")]
    MissingDate(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
