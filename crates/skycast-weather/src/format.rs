//! Display formatting helpers for timestamps and readings.

use chrono::{DateTime, TimeZone};
use std::fmt;

/// Long date line, e.g. "Saturday, June 1, 2024".
pub fn long_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%A, %B %-d, %Y").to_string()
}

/// Wall-clock time, e.g. "06:12".
pub fn clock_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%H:%M").to_string()
}

/// Abbreviated weekday, e.g. "Sun".
pub fn weekday_short<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%a").to_string()
}

/// Temperatures are shown as whole degrees.
pub fn round_temp(value: f64) -> i64 {
    value.round() as i64
}
