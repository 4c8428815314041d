//! Form date/time parsing and display formatting
//!
//! The UI masks inputs as `DD/MM/YYYY` dates and `HH:MM` times; everything
//! downstream works on wall-clock `chrono` values with no zone handling,
//! matching the single-session browser model.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{DATE_FORMAT, TIME_FORMAT};
use crate::errors::{Result, ScheduleError};

/// Parse a `DD/MM/YYYY` form date
///
/// Rejects impossible calendar values (e.g. `31/02/2021`).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| ScheduleError::InvalidDate)
}

/// Parse an `HH:MM` form time
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|_| ScheduleError::InvalidDate)
}

/// Combine a form date and time into a wall-clock timestamp
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Render a timestamp's time of day as `HH:MM` for table rows
pub fn format_time(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIME_FORMAT).to_string()
}
