use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::{NaiveDateTime, NaiveTime};

/// Eligibility rules for logging a visit.
///
/// Regular participants may log from `cutoff` onwards on the same calendar
/// day, and earn one minute per full minute elapsed since the cutoff.
/// Exempt identities skip the check and always earn `exempt_minutes`.
#[derive(Debug, Clone)]
pub struct CutoffPolicy {
    pub cutoff: NaiveTime,
    pub exempt_names: Vec<String>,
    pub exempt_minutes: i64,
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self {
            cutoff: NaiveTime::from_hms_opt(16, 0, 0).expect("16:00 is a valid time"),
            exempt_names: vec!["TestUser 1".to_string(), "TestUser 2".to_string()],
            exempt_minutes: 240,
        }
    }
}

impl CutoffPolicy {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let cutoff = parse_time(&cfg.cutoff_time).ok_or_else(|| {
            AppError::Config(format!(
                "cutoff_time must be HH:MM, got '{}'",
                cfg.cutoff_time
            ))
        })?;

        if cfg.exempt_minutes < 0 {
            return Err(AppError::Config(format!(
                "exempt_minutes must not be negative, got {}",
                cfg.exempt_minutes
            )));
        }

        Ok(Self {
            cutoff,
            exempt_names: cfg.exempt_names.clone(),
            exempt_minutes: cfg.exempt_minutes,
        })
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt_names.iter().any(|n| n == name)
    }

    /// The cutoff instant on `now`'s calendar date.
    pub fn cutoff_for(&self, now: &NaiveDateTime) -> NaiveDateTime {
        now.date().and_time(self.cutoff)
    }

    /// Minutes to credit for a visit logged at `now`, or `TooEarly`.
    pub fn minutes_for(&self, name: &str, now: &NaiveDateTime) -> AppResult<i64> {
        if self.is_exempt(name) {
            return Ok(self.exempt_minutes);
        }

        let cutoff = self.cutoff_for(now);
        if *now < cutoff {
            return Err(AppError::TooEarly { cutoff });
        }

        // non-negative here, so integer division floors
        Ok((*now - cutoff).num_seconds() / 60)
    }
}
