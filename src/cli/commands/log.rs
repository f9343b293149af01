use crate::cli::response::Response;
use crate::core::AttendanceEngine;
use crate::errors::AppResult;
use crate::store::LedgerStore;
use crate::utils::time;

/// Handle the `log` command. `at` replaces the current time when given.
pub fn handle<S: LedgerStore>(
    engine: &mut AttendanceEngine<S>,
    name: &str,
    at: Option<&str>,
) -> AppResult<Response> {
    let now = match at {
        Some(s) => time::parse_timestamp(s)?,
        None => time::now(),
    };

    let event = engine.log(name, now)?;
    Ok(Response::logged(&event))
}
