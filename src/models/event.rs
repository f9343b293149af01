use crate::store::LedgerRow;
use crate::utils::{duration, time};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single attendance event, the typed form of one ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub name: String,
    pub timestamp: NaiveDateTime, // ⇔ Timestamp column (ISO-8601, local)
    pub minutes: i64,             // ⇔ Duration column ("Xh Ym")
}

impl Event {
    pub fn new(name: impl Into<String>, timestamp: NaiveDateTime, minutes: i64) -> Self {
        Self {
            name: name.into(),
            timestamp,
            minutes,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    pub fn duration_str(&self) -> String {
        duration::format_minutes(self.minutes)
    }

    pub fn to_row(&self) -> LedgerRow {
        LedgerRow::new(
            self.name.clone(),
            time::format_timestamp(&self.timestamp),
            self.duration_str(),
        )
    }
}
