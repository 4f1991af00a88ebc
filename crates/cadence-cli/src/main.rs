//! `cadence` CLI — count schedulable weekly meetings against a calendar file.
//!
//! ## Usage
//!
//! ```sh
//! # How many Thursday 12:30-13:00 meetings fit into 2019?
//! cadence count --calendar cal.json \
//!     --from 2019-01-01 --to 2020-01-01 \
//!     --weekday thursday --slot 12:30-13:00
//!
//! # Same question, but block on day-off flags instead of booked events
//! cadence count --calendar cal.json \
//!     --from 2019-01-02 --to 2020-01-02 \
//!     --weekday wednesday --slot 12:30-13:30 --policy days-off
//!
//! # List what is booked on a date
//! cadence show --calendar cal.json --date 2019-01-16
//!
//! # Run the built-in demo scenarios
//! cadence demo
//! ```

use anyhow::{bail, Context, Result};
use cadence_engine::{Calendar, ConflictPolicy, DaySchedule, Interval, MeetingRequest};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "cadence", version, about = "Weekly-meeting scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count how many occurrences of a weekly slot fit into a date range
    Count {
        /// Calendar JSON file (see `demo` for the shape)
        #[arg(short, long)]
        calendar: String,
        /// First date of the range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: NaiveDate,
        /// Last date of the range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: NaiveDate,
        /// Weekday of the slot: a name ("thursday") or 1-7 with 1 = Sunday
        #[arg(long)]
        weekday: String,
        /// Time slot as HH:MM-HH:MM
        #[arg(long)]
        slot: String,
        /// Conflict policy: "schedule" blocks on booked events, "days-off"
        /// blocks on day-off flags
        #[arg(long, default_value = "schedule")]
        policy: String,
    },
    /// List the events booked on one date
    Show {
        /// Calendar JSON file
        #[arg(short, long)]
        calendar: String,
        /// Date to list (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Seed the reference scenarios and print their occurrence counts
    Demo,
}

/// On-disk calendar: a list of booked events plus a list of dates off.
#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(default = "default_user")]
    user: String,
    #[serde(default)]
    events: Vec<EventRecord>,
    #[serde(default)]
    days_off: Vec<NaiveDate>,
}

fn default_user() -> String {
    "local".to_string()
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    name: String,
    date: NaiveDate,
    /// Start time, HH:MM
    start: String,
    /// End time, HH:MM
    end: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count {
            calendar,
            from,
            to,
            weekday,
            slot,
            policy,
        } => {
            let cal = load_calendar(&calendar)?;
            let weekday = parse_weekday(&weekday)?;
            let ((sh, sm), (eh, em)) = parse_slot(&slot)?;
            let policy = parse_policy(&policy)?;

            let request = MeetingRequest {
                start_date: from,
                end_date: to,
                template: Interval::template("requested slot", weekday, sh, sm, eh, em)?,
            };
            let count = cadence_engine::count_occurrences(&cal, &request, policy);
            println!("{}", count);
        }
        Commands::Show { calendar, date } => {
            let cal = load_calendar(&calendar)?;
            let weekday = date.weekday().number_from_sunday();
            match cal.lookup(weekday, date)? {
                None => println!("{}: nothing booked", date),
                Some(day) => {
                    if day.is_day_off() {
                        println!("{}: day off", date);
                    }
                    for event in day.events() {
                        println!(
                            "{}: {:02}:{:02}-{:02}:{:02}  {}",
                            date,
                            event.start_minute() / 60,
                            event.start_minute() % 60,
                            event.end_minute() / 60,
                            event.end_minute() % 60,
                            event.name()
                        );
                    }
                }
            }
        }
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

fn load_calendar(path: &str) -> Result<Calendar> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read calendar file: {}", path))?;
    let file: CalendarFile =
        serde_json::from_str(&raw).with_context(|| format!("Invalid calendar file: {}", path))?;

    let mut cal = Calendar::new(file.user);
    // Days off first: booking an event on an already-registered date keeps
    // that date's flag, while registering a day replaces the whole schedule.
    for date in file.days_off {
        cal.add_day_off(DaySchedule::new(date, true));
    }
    for record in file.events {
        let (sh, sm) = parse_time(&record.start)
            .with_context(|| format!("Event \"{}\": bad start time", record.name))?;
        let (eh, em) = parse_time(&record.end)
            .with_context(|| format!("Event \"{}\": bad end time", record.name))?;
        let weekday = record.date.weekday().number_from_sunday();
        let interval = Interval::new(record.name, Some(record.date), weekday, sh, sm, eh, em)?;
        cal.add_event(interval)?;
    }
    Ok(cal)
}

/// Parse a weekday name or a 1-7 number (1 = Sunday).
fn parse_weekday(raw: &str) -> Result<u32> {
    match raw.to_ascii_lowercase().as_str() {
        "sunday" | "sun" => Ok(1),
        "monday" | "mon" => Ok(2),
        "tuesday" | "tue" => Ok(3),
        "wednesday" | "wed" => Ok(4),
        "thursday" | "thu" => Ok(5),
        "friday" | "fri" => Ok(6),
        "saturday" | "sat" => Ok(7),
        other => match other.parse::<u32>() {
            Ok(n @ 1..=7) => Ok(n),
            _ => bail!("Unknown weekday: '{}'. Use a name or 1-7 (1 = Sunday)", raw),
        },
    }
}

/// Parse "HH:MM-HH:MM" into two hour/minute pairs.
fn parse_slot(raw: &str) -> Result<((u32, u32), (u32, u32))> {
    let (start, end) = raw
        .split_once('-')
        .with_context(|| format!("Bad slot '{}': expected HH:MM-HH:MM", raw))?;
    Ok((parse_time(start)?, parse_time(end)?))
}

/// Parse "HH:MM" into an hour/minute pair.
fn parse_time(raw: &str) -> Result<(u32, u32)> {
    let (h, m) = raw
        .trim()
        .split_once(':')
        .with_context(|| format!("Bad time '{}': expected HH:MM", raw))?;
    let hour: u32 = h.parse().with_context(|| format!("Bad hour in '{}'", raw))?;
    let minute: u32 = m
        .parse()
        .with_context(|| format!("Bad minute in '{}'", raw))?;
    Ok((hour, minute))
}

fn parse_policy(raw: &str) -> Result<ConflictPolicy> {
    match raw {
        "schedule" => Ok(ConflictPolicy::Schedule),
        "days-off" => Ok(ConflictPolicy::DaysOff),
        other => bail!(
            "Unknown policy: '{}'. Available policies: schedule, days-off",
            other
        ),
    }
}

/// The two reference scenarios: a year of Thursday meetings against a booked
/// schedule, and a year of Wednesday meetings against three days off.
fn run_demo() -> Result<()> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");
    let event = |name: &str, d: NaiveDate, sh, sm, eh, em| -> Result<Interval> {
        let weekday = d.weekday().number_from_sunday();
        Ok(Interval::new(name, Some(d), weekday, sh, sm, eh, em)?)
    };

    // Scenario 1: schedule policy.
    let mut schedule_cal = Calendar::new("demo-schedule");
    schedule_cal.add_event(event("design review", date(2019, 1, 16), 9, 30, 11, 30)?)?;
    schedule_cal.add_event(event("team lunch", date(2019, 1, 16), 12, 0, 13, 0)?)?;
    schedule_cal.add_event(event("retro", date(2020, 1, 23), 11, 40, 12, 55)?)?;
    schedule_cal.add_event(event("planning", date(2020, 1, 23), 12, 30, 14, 0)?)?;

    let thursday_slot = MeetingRequest {
        start_date: date(2019, 1, 1),
        end_date: date(2020, 1, 1),
        template: Interval::template("weekly sync", 5, 12, 30, 13, 0)?,
    };
    println!(
        "Thursday 12:30-13:00, 2019-01-01..2020-01-01 (schedule policy): {}",
        schedule_cal.count_occurrences_schedule(&thursday_slot)
    );

    // Scenario 2: days-off policy. Three Wednesdays off in 2019.
    let mut days_off_cal = Calendar::new("demo-days-off");
    for d in [date(2019, 1, 9), date(2019, 5, 15), date(2019, 10, 9)] {
        days_off_cal.add_day_off(DaySchedule::new(d, true));
    }
    days_off_cal.add_day(DaySchedule::new(date(2019, 10, 23), false));
    days_off_cal.add_day(DaySchedule::new(date(2019, 11, 27), false));

    let wednesday_slot = MeetingRequest {
        start_date: date(2019, 1, 2),
        end_date: date(2020, 1, 2),
        template: Interval::template("weekly 1:1", 4, 12, 30, 13, 30)?,
    };
    println!(
        "Wednesday 12:30-13:30, 2019-01-02..2020-01-02 (days-off policy): {}",
        days_off_cal.count_occurrences_days_off(&wednesday_slot)
    );

    Ok(())
}
