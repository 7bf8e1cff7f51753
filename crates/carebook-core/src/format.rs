//! Display formatting for date chips, receipts and amounts.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// `"Mon"`
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// `"10 Jun"`
pub fn day_month(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%b"))
}

/// `"10 Jun 2024"`
pub fn display_date(date: NaiveDate) -> String {
    format!("{} {}", day_month(date), date.year())
}

/// `"2024-06-10"`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an ISO `YYYY-MM-DD` date. A trailing time component (`"2024-06-10T00:00:00Z"`) is ignored.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = match s.as_bytes().get(10) {
        None => s,
        Some(b'T') | Some(b' ') => s.get(..10)?,
        Some(_) => return None,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse a wall-clock timestamp.
///
/// Accepts RFC 3339 (`"2024-06-10T10:00:00+05:30"`, offset kept as local wall time) or a
/// naive `"2024-06-10T10:00[:00]"` / `"2024-06-10 10:00[:00]"`.
pub fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Format minor units as `"Rs. 1,250.00"`.
pub fn format_amount(minor: u64, currency_symbol: &str) -> String {
    let major = minor / 100;
    let cents = minor % 100;
    let grouped = group_thousands(major);

    if currency_symbol.is_empty() {
        format!("{}.{:02}", grouped, cents)
    } else {
        format!("{} {}.{:02}", currency_symbol, grouped, cents)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
