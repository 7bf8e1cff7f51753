//! Weekly recurring doctor schedule.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock;

/// Day of the week, ordered Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    /// Parse a full weekday name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.name() == lower)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown weekday: {}", s))
    }
}

/// A `(from, to)` pair of times of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl TimeWindow {
    pub fn new(from: NaiveTime, to: NaiveTime) -> Self {
        Self { from, to }
    }
}

/// Schedule entry as received from the server, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDaySchedule {
    pub day: String,
    pub windows: Vec<RawTimeWindow>,
}

/// Time window labels as received from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTimeWindow {
    pub time_from: String,
    pub time_to: String,
}

/// Recurring availability keyed by weekday. A day absent from the map has no availability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: BTreeMap<DayOfWeek, Vec<TimeWindow>>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from server entries.
    ///
    /// Unknown day names and unparseable windows are dropped. Repeated days merge.
    pub fn from_raw(entries: &[RawDaySchedule]) -> Self {
        let mut schedule = Self::new();

        for entry in entries {
            let Some(day) = DayOfWeek::parse(&entry.day) else {
                tracing::debug!(day = %entry.day, "ignoring schedule entry with unknown weekday");
                continue;
            };

            let windows: Vec<TimeWindow> = entry
                .windows
                .iter()
                .filter_map(|w| {
                    let window = clock::parse_window(&w.time_from, &w.time_to);
                    if window.is_none() {
                        tracing::debug!(
                            from = %w.time_from,
                            to = %w.time_to,
                            "ignoring unparseable schedule window"
                        );
                    }
                    window
                })
                .collect();

            schedule.add_windows(day, windows);
        }

        schedule
    }

    /// Append windows for a day.
    pub fn add_windows(&mut self, day: DayOfWeek, windows: impl IntoIterator<Item = TimeWindow>) {
        let entry = self.days.entry(day).or_default();
        entry.extend(windows);
        if entry.is_empty() {
            self.days.remove(&day);
        }
    }

    /// Windows for a day (empty when the doctor does not work that day).
    pub fn windows(&self, day: DayOfWeek) -> &[TimeWindow] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the day has at least one window.
    pub fn is_available_on(&self, day: DayOfWeek) -> bool {
        !self.windows(day).is_empty()
    }

    /// Days with availability, Monday first.
    pub fn available_days(&self) -> Vec<DayOfWeek> {
        self.days.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(day: &str, windows: &[(&str, &str)]) -> RawDaySchedule {
        RawDaySchedule {
            day: day.into(),
            windows: windows
                .iter()
                .map(|(f, t)| RawTimeWindow {
                    time_from: (*f).into(),
                    time_to: (*t).into(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_day_names() {
        assert_eq!(DayOfWeek::parse("Monday"), Some(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::parse("WEDNESDAY"), Some(DayOfWeek::Wednesday));
        assert_eq!(DayOfWeek::parse(" sunday "), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::parse("Thu"), None);
        assert_eq!(DayOfWeek::parse("Funday"), None);
        assert_eq!(DayOfWeek::parse("mo"), None);
        assert_eq!(DayOfWeek::parse(""), None);
    }

    #[test]
    fn test_from_raw_drops_malformed() {
        let schedule = WeeklySchedule::from_raw(&[
            raw("Monday", &[("9:00 AM", "12:00 PM")]),
            raw("Someday", &[("9:00 AM", "12:00 PM")]),
            raw("tuesday", &[("late", "later")]),
            raw("Friday", &[]),
        ]);

        assert_eq!(schedule.available_days(), vec![DayOfWeek::Monday]);
        assert!(!schedule.is_available_on(DayOfWeek::Tuesday));
        assert!(!schedule.is_available_on(DayOfWeek::Friday));
    }

    #[test]
    fn test_from_raw_merges_repeated_days() {
        let schedule = WeeklySchedule::from_raw(&[
            raw("monday", &[("9:00", "12:00")]),
            raw("Monday", &[("14:00", "17:00")]),
        ]);

        assert_eq!(schedule.windows(DayOfWeek::Monday).len(), 2);
    }

    #[test]
    fn test_weekday_conversion() {
        assert_eq!(DayOfWeek::from(Weekday::Sat), DayOfWeek::Saturday);
        assert_eq!("friday".parse::<DayOfWeek>(), Ok(DayOfWeek::Friday));
    }
}
