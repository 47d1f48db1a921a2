//! Spreadsheet day-serial conversion
//!
//! Dates and times are stored in the sheet as floating-point day counts
//! from the epoch `1899-12-30T00:00:00`. The epoch sits two days before
//! the nominal 1900-01-01 to reproduce the historical 1900 leap-year
//! artifact of the format being emulated.
//!
//! All parsing is timezone-naive: calendar fields are taken at face
//! value, with no DST or offset adjustment. Malformed input yields
//! `None`; the writer decides what to substitute.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const MS_PER_DAY: f64 = 86_400_000.0;
const SECS_PER_DAY: f64 = 86_400.0;

fn epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Convert a `yyyy-mm-dd` string to a whole-day serial
pub fn date_serial(date_str: &str) -> Option<f64> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;
    Some((date - epoch()?).num_days() as f64)
}

/// Convert a `yyyy-mm-dd hh:mm:ss` string to a fractional day serial
pub fn date_time_serial(date_time_str: &str) -> Option<f64> {
    let date_time = NaiveDateTime::parse_from_str(date_time_str, "%Y-%m-%d %H:%M:%S").ok()?;
    let epoch = epoch()?.and_hms_opt(0, 0, 0)?;
    Some((date_time - epoch).num_milliseconds() as f64 / MS_PER_DAY)
}

/// Convert a `hh:mm:ss` string to a day fraction with no integer part
pub fn time_serial(time_str: &str) -> Option<f64> {
    let time = NaiveTime::parse_from_str(time_str, "%H:%M:%S").ok()?;
    Some(time.num_seconds_from_midnight() as f64 / SECS_PER_DAY)
}
