//! Human-readable timestamps for history entries.
//!
//! Produces strings like `June 4th 2024, 3:45:12 pm`: full English month
//! name, ordinal day, four-digit year, and a 12-hour clock with seconds.

use chrono::{Datelike, NaiveDateTime};

/// Format a date-time for display in the history
pub fn format_timestamp(at: NaiveDateTime) -> String {
    let day = at.day();
    format!(
        "{} {}{} {}, {}",
        at.format("%B"),
        day,
        ordinal_suffix(day),
        at.format("%Y"),
        at.format("%-I:%M:%S %P"),
    )
}

/// English ordinal suffix for a day of the month
fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
