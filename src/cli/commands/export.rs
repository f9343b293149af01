use crate::cli::response::Response;
use crate::core::AttendanceEngine;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::LedgerStore;
use std::path::Path;

pub fn handle<S: LedgerStore>(
    engine: &mut AttendanceEngine<S>,
    file: &str,
    force: bool,
) -> AppResult<Response> {
    let rows = engine.rows()?;
    let written = ExportLogic::export_csv(Path::new(file), &rows, force)?;
    engine.audit("export", file, &format!("Exported {} rows", written));

    Ok(Response::Exported {
        status: "exported".to_string(),
        file: file.to_string(),
        rows: written,
    })
}
