//! Time utilities: HH:MM parsing, ledger timestamp encoding, "now".

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime};

/// Timestamp layout written to the ledger (ISO-8601, local, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a ledger timestamp.
///
/// Accepts the naive layout the ledger writes (fractional seconds optional),
/// a minute-precision `YYYY-MM-DDTHH:MM`, and RFC 3339 with an offset (the
/// local wall-clock part is kept).
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    if let Ok(ts) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Ok(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(ts);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}
