//! Date helpers for building hash dates and display labels.

use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// The date and hour parts of a hash configuration, e.g. `"2013/11/14"` and `"0900"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConfig {
    pub date: String,
    pub hour: String,
}

/// Re-delimits `yyyyFmmFdd` as `yyyyTmmTdd`, where F and T are the from and to delimiters.
///
/// An empty `from_delimiter` means the input is the fixed-width form `yyyymmdd`.
/// Missing components render as empty strings.
pub fn ymd_redelimit(ymd: &str, from_delimiter: &str, to_delimiter: &str) -> String {
    if from_delimiter.is_empty() {
        let part = |start: usize, end: usize| ymd.get(start..end.min(ymd.len())).unwrap_or("");
        return [part(0, 4), part(4, 6), part(6, 8)].join(to_delimiter);
    }
    let head: String = ymd.chars().take(10).collect();
    let mut parts = head.split(from_delimiter);
    let mut next = || parts.next().unwrap_or("").to_string();
    [next(), next(), next()].join(to_delimiter)
}

/// The UTC year, month and day of `date` as `yyyyDmmDdd`, where D may be empty.
pub fn date_to_utc_ymd<Tz: TimeZone>(date: &DateTime<Tz>, delimiter: &str) -> String {
    let iso = date.with_timezone(&Utc).format("%Y-%m-%d").to_string();
    ymd_redelimit(&iso, "-", delimiter)
}

/// The hash date and hour for `date`, truncated to the hour.
pub fn date_to_config<Tz: TimeZone>(date: &DateTime<Tz>) -> DateConfig {
    let utc = date.with_timezone(&Utc);
    DateConfig {
        date: date_to_utc_ymd(&utc, "/"),
        hour: format!("{:02}00", utc.hour()),
    }
}

/// `"yyyy-mm-dd hh:00"` in UTC.
pub fn to_utc_iso<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d %H:00").to_string()
}

/// `"yyyy-mm-dd hh:00"` in the local time zone of the host.
pub fn to_local_iso<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:00").to_string()
}
