//! Integration tests for the `cadence` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the count, show, and
//! demo subcommands through the actual binary, including calendar-file
//! loading and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the calendar.json fixture.
fn calendar_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/calendar.json")
}

fn cadence() -> Command {
    Command::cargo_bin("cadence").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Count subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn count_schedule_policy_blocks_booked_thursday() {
    // 52 Thursdays in range, one blocked by the 2019-03-07 vendor call.
    cadence()
        .args([
            "count",
            "--calendar",
            calendar_path(),
            "--from",
            "2019-01-01",
            "--to",
            "2020-01-01",
            "--weekday",
            "thursday",
            "--slot",
            "12:30-13:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("51\n"));
}

#[test]
fn count_days_off_policy_blocks_flagged_wednesdays() {
    // 53 Wednesdays in range, three flagged off.
    cadence()
        .args([
            "count",
            "--calendar",
            calendar_path(),
            "--from",
            "2019-01-02",
            "--to",
            "2020-01-02",
            "--weekday",
            "wednesday",
            "--slot",
            "12:30-13:30",
            "--policy",
            "days-off",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("50\n"));
}

#[test]
fn count_accepts_numeric_weekday() {
    // 5 = Thursday; morning slot dodges the vendor call, so all 52 count.
    cadence()
        .args([
            "count",
            "--calendar",
            calendar_path(),
            "--from",
            "2019-01-01",
            "--to",
            "2020-01-01",
            "--weekday",
            "5",
            "--slot",
            "09:00-09:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("52\n"));
}

#[test]
fn count_rejects_unknown_policy() {
    cadence()
        .args([
            "count",
            "--calendar",
            calendar_path(),
            "--from",
            "2019-01-01",
            "--to",
            "2020-01-01",
            "--weekday",
            "thursday",
            "--slot",
            "12:30-13:00",
            "--policy",
            "strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown policy"));
}

#[test]
fn count_rejects_bad_weekday() {
    cadence()
        .args([
            "count",
            "--calendar",
            calendar_path(),
            "--from",
            "2019-01-01",
            "--to",
            "2020-01-01",
            "--weekday",
            "someday",
            "--slot",
            "12:30-13:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown weekday"));
}

#[test]
fn count_rejects_backwards_slot() {
    cadence()
        .args([
            "count",
            "--calendar",
            calendar_path(),
            "--from",
            "2019-01-01",
            "--to",
            "2020-01-01",
            "--weekday",
            "thursday",
            "--slot",
            "14:00-13:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid interval"));
}

#[test]
fn count_fails_on_missing_calendar_file() {
    cadence()
        .args([
            "count",
            "--calendar",
            "/nonexistent/calendar.json",
            "--from",
            "2019-01-01",
            "--to",
            "2020-01-01",
            "--weekday",
            "thursday",
            "--slot",
            "12:30-13:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read calendar file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Show subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn show_lists_booked_events_in_time_order() {
    cadence()
        .args(["show", "--calendar", calendar_path(), "--date", "2019-01-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:30-11:30  design review"))
        .stdout(predicate::str::contains("12:00-13:00  team lunch"));
}

#[test]
fn show_reports_empty_date() {
    cadence()
        .args(["show", "--calendar", calendar_path(), "--date", "2019-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing booked"));
}

#[test]
fn show_reports_day_off() {
    cadence()
        .args(["show", "--calendar", calendar_path(), "--date", "2019-01-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day off"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Demo subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn demo_prints_reference_counts() {
    cadence()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("schedule policy): 52"))
        .stdout(predicate::str::contains("days-off policy): 50"));
}
