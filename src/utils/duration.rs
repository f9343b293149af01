//! Duration codec: the `"Xh Ym"` text form used in the ledger's Duration column.
//!
//! Minutes are the canonical in-memory representation; the string form only
//! exists at the store boundary. The accepted grammar is:
//!
//! ```text
//! duration := hours " "+ minutes | hours | minutes
//! hours    := digit+ "h"
//! minutes  := digit+ "m"
//! ```
//!
//! Leading/trailing whitespace is ignored.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<h>\d+)h(?:\s+(?P<m>\d+)m)?|(?P<only_m>\d+)m)$")
        .expect("duration grammar is a valid regex")
});

/// Render minutes as `"{h}h {m}m"`. Both components are always present.
pub fn format_minutes(minutes: i64) -> String {
    let m = minutes.max(0);
    format!("{}h {}m", m / 60, m % 60)
}

/// Parse one of `"Xh Ym"`, `"Xh"` or `"Ym"` back into minutes.
pub fn parse_duration(s: &str) -> AppResult<i64> {
    let invalid = || AppError::InvalidDuration(s.to_string());

    let caps = DURATION_RE.captures(s.trim()).ok_or_else(invalid)?;

    let number = |name: &str| -> AppResult<i64> {
        match caps.name(name) {
            Some(m) => m.as_str().parse::<i64>().map_err(|_| invalid()),
            None => Ok(0),
        }
    };

    let hours = number("h")?;
    let minutes = number("m")? + number("only_m")?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_both_components() {
        assert_eq!(format_minutes(0), "0h 0m");
        assert_eq!(format_minutes(30), "0h 30m");
        assert_eq!(format_minutes(120), "2h 0m");
        assert_eq!(format_minutes(150), "2h 30m");
        assert_eq!(format_minutes(1441), "24h 1m");
    }

    #[test]
    fn parses_the_three_shapes() {
        assert_eq!(parse_duration("2h 30m").unwrap(), 150);
        assert_eq!(parse_duration("3h").unwrap(), 180);
        assert_eq!(parse_duration("45m").unwrap(), 45);
        assert_eq!(parse_duration("  1h   5m ").unwrap(), 65);
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "abc", "1h30", "h m", "-1h 0m", "1.5h", "30m 1h", "1 h"] {
            assert!(
                matches!(parse_duration(bad), Err(AppError::InvalidDuration(_))),
                "expected failure for {bad:?}"
            );
        }
    }

    #[test]
    fn round_trips_through_format() {
        for m in [0, 1, 59, 60, 61, 240, 999, 10_000] {
            assert_eq!(parse_duration(&format_minutes(m)).unwrap(), m);
        }
    }
}
