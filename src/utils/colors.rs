/// ANSI color helper utilities for terminal output.
use crate::core::shifts::window::ShiftStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Past rows are dimmed, the running shift is green, upcoming ones yellow.
pub fn color_for_status(status: ShiftStatus) -> &'static str {
    match status {
        ShiftStatus::Past => GREY,
        ShiftStatus::Current => GREEN,
        ShiftStatus::Upcoming => YELLOW,
    }
}

pub fn paint(color: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{color}{value}{RESET}")
}

/// Grey out zero-ish values ("0", "0.00", "00h 00m").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0" || v == "0.00" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
