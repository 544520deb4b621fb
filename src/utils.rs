/// Utility functions
use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const CLOCK_FORMAT: &str = "%H:%M";

/// Use the requested date verbatim, falling back to the server's current day.
pub fn resolve_date(requested: Option<&str>) -> String {
    match requested {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => Local::now().format(DATE_FORMAT).to_string(),
    }
}

/// Parse a `YYYY-MM-DD` string
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Convert a UTC `HH:MM` on `anchor` to wall-clock `HH:MM` in `tz`.
///
/// The anchor day decides which offset applies, so DST is honored for the
/// date the time belongs to. Returns `None` when `utc_time` is not `HH:MM`.
pub fn utc_time_to_local(utc_time: &str, anchor: NaiveDate, tz: Tz) -> Option<String> {
    let time = NaiveTime::parse_from_str(utc_time.trim(), CLOCK_FORMAT).ok()?;
    let utc = Utc.from_utc_datetime(&anchor.and_time(time));
    Some(utc.with_timezone(&tz).format(CLOCK_FORMAT).to_string())
}
