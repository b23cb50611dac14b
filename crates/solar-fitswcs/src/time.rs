//! Observation times.
//!
//! Times are carried as [`chrono::NaiveDateTime`] and interpreted as UTC.

use alloc::string::{String, ToString};

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Julian date of the Unix epoch, 1970-01-01T00:00:00.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Accepted date-time layouts, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an observation time such as `2013-10-28 00:00` or
/// `2013-10-28T00:00:00.000`. A bare date means midnight.
pub fn parse_time(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    for format in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(t);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(Error::InvalidTime)
}

/// Format as the FITS `DATE-OBS` ISO layout with millisecond precision.
pub fn format_isot(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// Julian date (UTC) of `time`.
pub fn julian_date(time: &NaiveDateTime) -> f64 {
    let utc = time.and_utc();
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}
