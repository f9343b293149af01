//! Read-only commands: attendance, stats, top, check, link.

use crate::cli::response::Response;
use crate::core::AttendanceEngine;
use crate::errors::{AppError, AppResult};
use crate::store::LedgerStore;

pub fn attendance<S: LedgerStore>(
    engine: &mut AttendanceEngine<S>,
    name: &str,
) -> AppResult<Response> {
    let result = engine.attendance(name)?;
    Ok(Response::attendance(name, result))
}

pub fn stats<S: LedgerStore>(engine: &mut AttendanceEngine<S>) -> AppResult<Response> {
    Ok(Response::stats(engine.stats()?))
}

/// An empty ledger has no leaders; report it as "no data" rather than an error.
pub fn top<S: LedgerStore>(engine: &mut AttendanceEngine<S>) -> AppResult<Response> {
    match engine.top_stats() {
        Ok(top) => Ok(Response::top(top)),
        Err(AppError::EmptyLedger) => Ok(Response::no_top_data()),
        Err(e) => Err(e),
    }
}

pub fn check<S: LedgerStore>(engine: &mut AttendanceEngine<S>, name: &str) -> AppResult<Response> {
    Ok(Response::Exists {
        exists: engine.exists(name)?,
    })
}

pub fn link<S: LedgerStore>(engine: &mut AttendanceEngine<S>) -> AppResult<Response> {
    Ok(Response::Link {
        link: engine.link()?,
    })
}
