//! Typed results of the attendance engine. Minutes stay integers here; the
//! dispatcher formats them when it builds the JSON payload.

use crate::models::event::Event;
use serde::Serialize;

/// Outcome of `attendance(name)`.
///
/// A participant whose visits all sum to zero minutes is reported as
/// `NoRecords`, the same as one who never logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attendance {
    Total(i64),
    NoRecords,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantTotal {
    pub name: String,
    pub minutes: i64,
}

/// Outcome of `stats()`: per-name totals in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stats {
    Totals(Vec<ParticipantTotal>),
    NoData,
}

/// What `log(name, now)` wrote.
pub type LogReceipt = Event;
