//! Calendar dates on which a doctor's weekly schedule has availability.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{DayOfWeek, WeeklySchedule};

/// Default number of days past today that are offered for booking.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Enumerate bookable dates from `today` through `today + horizon_days`, inclusive.
///
/// The result is strictly increasing, never contains a date before `today`, and has at
/// most `horizon_days + 1` entries. An empty schedule yields an empty list.
pub fn compute_available_dates(
    schedule: &WeeklySchedule,
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<NaiveDate> {
    if schedule.is_empty() {
        return Vec::new();
    }

    let mut dates = Vec::new();
    for offset in 0..=horizon_days {
        let Some(candidate) = today.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        if candidate < today {
            continue;
        }
        if schedule.is_available_on(DayOfWeek::from(candidate.weekday())) {
            dates.push(candidate);
        }
    }

    tracing::debug!(
        %today,
        horizon_days,
        count = dates.len(),
        "computed available dates"
    );
    dates
}

/// First bookable date, or `None` when the doctor has no availability within the horizon.
pub fn next_available_date(
    schedule: &WeeklySchedule,
    today: NaiveDate,
    horizon_days: u32,
) -> Option<NaiveDate> {
    compute_available_dates(schedule, today, horizon_days)
        .into_iter()
        .next()
}
