//! Ledger store adapter.
//!
//! The ledger is an ordered, append-only table of three text cells per row.
//! Its first row is always the header `["Name", "Timestamp", "Duration"]`.
//! The engine only talks to the table through [`LedgerStore`], so the
//! backing store can be a SQLite file, an in-memory table or anything else
//! that can append and read rows in order.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryLedger;
pub use sqlite::SqliteLedger;

use crate::errors::AppResult;
use serde::Serialize;

pub const HEADER: [&str; 3] = ["Name", "Timestamp", "Duration"];

/// One raw ledger row, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    pub name: String,
    pub timestamp: String,
    pub duration: String,
}

impl LedgerRow {
    pub fn new(
        name: impl Into<String>,
        timestamp: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            timestamp: timestamp.into(),
            duration: duration.into(),
        }
    }

    pub fn header() -> Self {
        Self::new(HEADER[0], HEADER[1], HEADER[2])
    }

    pub fn is_header(&self) -> bool {
        self.name == HEADER[0] && self.timestamp == HEADER[1] && self.duration == HEADER[2]
    }

    pub fn cells(&self) -> [&str; 3] {
        [
            self.name.as_str(),
            self.timestamp.as_str(),
            self.duration.as_str(),
        ]
    }
}

/// One line of the internal audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub trait LedgerStore {
    /// Open the table, provisioning it with the header row if absent. Idempotent.
    fn open_or_create(&mut self) -> AppResult<()>;

    fn append_row(&mut self, row: &LedgerRow) -> AppResult<()>;

    /// All rows in insertion order, header first.
    fn read_all_rows(&mut self) -> AppResult<Vec<LedgerRow>>;

    /// Erase every row and write the header back.
    fn clear_and_reset_header(&mut self) -> AppResult<()>;

    /// Opaque locator for the table, suitable for sharing.
    fn identity_url(&self) -> String;

    /// Record a mutating operation in the store's audit trail, if it keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }

    fn audit_entries(&mut self) -> AppResult<Vec<AuditEntry>> {
        Ok(Vec::new())
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for &mut S {
    fn open_or_create(&mut self) -> AppResult<()> {
        (**self).open_or_create()
    }
    fn append_row(&mut self, row: &LedgerRow) -> AppResult<()> {
        (**self).append_row(row)
    }
    fn read_all_rows(&mut self) -> AppResult<Vec<LedgerRow>> {
        (**self).read_all_rows()
    }
    fn clear_and_reset_header(&mut self) -> AppResult<()> {
        (**self).clear_and_reset_header()
    }
    fn identity_url(&self) -> String {
        (**self).identity_url()
    }
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        (**self).audit(operation, target, message)
    }
    fn audit_entries(&mut self) -> AppResult<Vec<AuditEntry>> {
        (**self).audit_entries()
    }
}
