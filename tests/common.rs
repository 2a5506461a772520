#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so a real
/// configuration file is never read or written.
pub fn shl() -> Command {
    let mut home = env::temp_dir();
    home.push("shiftlogger_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("shiftlogger");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// One calendar event block with local (UTC-8) timestamps.
pub fn vevent(start: &str, end: &str, summary: &str) -> String {
    format!(
        "BEGIN:VEVENT\r\nDTSTART;TZID=America/Los_Angeles:{start}\r\nDTEND;TZID=America/Los_Angeles:{end}\r\nSUMMARY:{summary}\r\nEND:VEVENT\r\n"
    )
}

pub fn calendar(events: &[String]) -> String {
    format!(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\n{}END:VCALENDAR\r\n",
        events.concat()
    )
}

/// Write a calendar file and return its path.
pub fn write_calendar(name: &str, events: &[String]) -> String {
    let path = temp_out(name, "ics");
    fs::write(&path, calendar(events)).expect("write calendar file");
    path
}

/// Initialize a fresh DB (no config file written).
pub fn init_db(db_path: &str) {
    shl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB and import a calendar into it.
pub fn init_db_with_schedule(name: &str, db_path: &str, events: &[String]) {
    init_db(db_path);
    let file = write_calendar(name, events);
    shl()
        .args(["--db", db_path, "shifts", "import", "--file", &file])
        .assert()
        .success();
}
