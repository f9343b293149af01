use crate::cli::response::Response;
use crate::core::AttendanceEngine;
use crate::errors::AppResult;
use crate::store::LedgerStore;

pub fn handle<S: LedgerStore>(engine: &mut AttendanceEngine<S>) -> AppResult<Response> {
    Ok(Response::Audit {
        audit: engine.audit_entries()?,
    })
}
