//! SQLite-backed ledger. The file is opened lazily so that requests rejected
//! before any I/O (validation, cutoff) never touch the disk.

use super::{AuditEntry, LedgerRow, LedgerStore};
use crate::db::pool::DbPool;
use crate::db::{log as audit_log, queries};
use crate::errors::AppResult;
use crate::utils::path::file_url;
use std::path::PathBuf;

pub struct SqliteLedger {
    path: PathBuf,
    pool: Option<DbPool>,
}

impl SqliteLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pool: None,
        }
    }

    fn pool(&mut self) -> AppResult<&mut DbPool> {
        let pool = match self.pool.take() {
            Some(pool) => pool,
            None => {
                log::debug!("Opening ledger {}", self.path.display());
                DbPool::new(&self.path)?
            }
        };
        Ok(self.pool.insert(pool))
    }
}

impl LedgerStore for SqliteLedger {
    fn open_or_create(&mut self) -> AppResult<()> {
        self.pool().map(|_| ())
    }

    fn append_row(&mut self, row: &LedgerRow) -> AppResult<()> {
        let pool = self.pool()?;
        queries::insert_row(&pool.conn, row)
    }

    fn read_all_rows(&mut self) -> AppResult<Vec<LedgerRow>> {
        let pool = self.pool()?;
        queries::load_rows(&pool.conn)
    }

    fn clear_and_reset_header(&mut self) -> AppResult<()> {
        self.pool()?.with_conn(queries::reset_ledger)
    }

    fn identity_url(&self) -> String {
        file_url(&self.path)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let pool = self.pool()?;
        audit_log::write_audit(&pool.conn, operation, target, message)
    }

    fn audit_entries(&mut self) -> AppResult<Vec<AuditEntry>> {
        let pool = self.pool()?;
        audit_log::load_audit(&pool.conn)
    }
}
