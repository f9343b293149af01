//! In-process ledger, used by tests and by embedders that keep their own persistence.

use super::{AuditEntry, LedgerRow, LedgerStore};
use crate::errors::{AppError, AppResult};
use crate::utils::time;

#[derive(Debug, Default)]
pub struct MemoryLedger {
    label: String,
    rows: Vec<LedgerRow>,
    audit: Vec<AuditEntry>,
    opened: bool,
    fail_with: Option<String>,
}

impl MemoryLedger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Seed the table with body rows (the header is added on open).
    pub fn with_rows<I>(label: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = LedgerRow>,
    {
        let mut ledger = Self::new(label);
        ledger.rows.push(LedgerRow::header());
        ledger.rows.extend(rows);
        ledger.opened = true;
        ledger
    }

    /// A ledger whose every operation fails, to exercise store error paths.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            label: "unavailable".to_string(),
            fail_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Rows as currently held, header included.
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    fn check(&self) -> AppResult<()> {
        match &self.fail_with {
            Some(reason) => Err(AppError::Store(reason.clone())),
            None => Ok(()),
        }
    }

    fn ensure_open(&mut self) -> AppResult<()> {
        self.check()?;
        if !self.opened {
            if self.rows.is_empty() {
                self.rows.push(LedgerRow::header());
            }
            self.opened = true;
        }
        Ok(())
    }
}

impl LedgerStore for MemoryLedger {
    fn open_or_create(&mut self) -> AppResult<()> {
        self.ensure_open()
    }

    fn append_row(&mut self, row: &LedgerRow) -> AppResult<()> {
        self.ensure_open()?;
        self.rows.push(row.clone());
        Ok(())
    }

    fn read_all_rows(&mut self) -> AppResult<Vec<LedgerRow>> {
        self.ensure_open()?;
        Ok(self.rows.clone())
    }

    fn clear_and_reset_header(&mut self) -> AppResult<()> {
        self.ensure_open()?;
        self.rows.clear();
        self.rows.push(LedgerRow::header());
        Ok(())
    }

    fn identity_url(&self) -> String {
        format!("memory://{}", self.label)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.check()?;
        let id = self.audit.len() as i64 + 1;
        self.audit.push(AuditEntry {
            id,
            date: time::format_timestamp(&time::now()),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn audit_entries(&mut self) -> AppResult<Vec<AuditEntry>> {
        self.check()?;
        Ok(self.audit.clone())
    }
}
