use crate::errors::{AppError, AppResult};
use crate::store::LedgerRow;
use crate::ui::prompt::confirm;
use csv::Writer;
use std::io;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the ledger (header included) to `path` as CSV. Returns the
    /// number of body rows written.
    pub fn export_csv(path: &Path, rows: &[LedgerRow], force: bool) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let mut wtr = Writer::from_path(path)?;
        let mut body_rows = 0;

        for (i, row) in rows.iter().enumerate() {
            wtr.write_record(row.cells())?;
            if i > 0 {
                body_rows += 1;
            }
        }

        wtr.flush()?;
        log::info!("Exported {} rows to {}", body_rows, path.display());
        Ok(body_rows)
    }
}

/// An existing file is only replaced with `force` or an explicit yes.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite it?", path.display())) {
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
