use crate::cli::response::Response;
use crate::core::AttendanceEngine;
use crate::errors::AppResult;
use crate::store::LedgerStore;
use crate::ui::prompt::confirm;

pub fn handle<S: LedgerStore>(engine: &mut AttendanceEngine<S>, yes: bool) -> AppResult<Response> {
    if !yes && !confirm("Clear ALL attendance data? This action cannot be undone.") {
        return Ok(Response::status("cancelled", "Clear operation cancelled."));
    }

    engine.clear()?;
    Ok(Response::status(
        "cleared",
        "All data has been cleared from the ledger.",
    ))
}
