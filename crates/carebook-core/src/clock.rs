//! Time-of-day labels as the Appointment Service sends them.
//!
//! Accepted forms:
//! - `"H:MM"` / `"HH:MM"` (24-hour)
//! - `"H:MM AM"` / `"H:MM pm"` / `"H:MMam"` (12-hour)
//!
//! 12-hour values normalize as: 12 AM → 0, 12 PM stays 12, other PM hours add 12.

use chrono::{NaiveTime, Timelike};

use crate::models::TimeWindow;

/// Separator between the start and end of a slot label (`"9:00 AM - 9:30 AM"`).
const RANGE_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a single time-of-day label.
///
/// Returns `None` for anything that is not one of the accepted forms.
pub fn parse_time_label(label: &str) -> Option<NaiveTime> {
    let trimmed = label.trim();
    let (clock, meridiem) = split_meridiem(trimmed);

    let (hours, minutes) = clock.trim().split_once(':')?;
    let hours: u32 = parse_digits(hours)?;
    let minutes: u32 = parse_digits(minutes)?;
    if minutes > 59 {
        return None;
    }

    let hours = match meridiem {
        None if hours <= 23 => hours,
        None => return None,
        Some(_) if !(1..=12).contains(&hours) => return None,
        Some(Meridiem::Am) if hours == 12 => 0,
        Some(Meridiem::Am) => hours,
        Some(Meridiem::Pm) if hours == 12 => 12,
        Some(Meridiem::Pm) => hours + 12,
    };

    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Start time of a slot label such as `"9:00 AM - 9:30 AM"` or `"14:00 - 14:30"`.
pub fn slot_start(label: &str) -> Option<NaiveTime> {
    let start = label.split(RANGE_SEPARATOR).next()?;
    parse_time_label(start)
}

/// End time of a slot label, if it has one.
pub fn slot_end(label: &str) -> Option<NaiveTime> {
    let (_, end) = label.split_once(RANGE_SEPARATOR)?;
    parse_time_label(end)
}

/// Parse a `(from, to)` pair of labels into a window.
pub fn parse_window(from: &str, to: &str) -> Option<TimeWindow> {
    Some(TimeWindow {
        from: parse_time_label(from)?,
        to: parse_time_label(to)?,
    })
}

/// Render a time as `"9:05 AM"`.
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

fn split_meridiem(label: &str) -> (&str, Option<Meridiem>) {
    let lower = label.to_ascii_lowercase();
    if lower.ends_with("am") {
        (&label[..label.len() - 2], Some(Meridiem::Am))
    } else if lower.ends_with("pm") {
        (&label[..label.len() - 2], Some(Meridiem::Pm))
    } else {
        (label, None)
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
