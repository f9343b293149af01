use crate::cli::response::Response;
use crate::config::Config;
use crate::core::AttendanceEngine;
use crate::errors::AppResult;
use crate::store::LedgerStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (and file, unless in test mode)
///  - the ledger table with its header row
///  - all pending DB migrations
pub fn handle<S: LedgerStore>(
    engine: &mut AttendanceEngine<S>,
    cfg: &Config,
    is_test: bool,
) -> AppResult<Response> {
    let config_path = cfg.init_all(is_test)?;

    info("Initializing rAttendance…");
    info(format!("Config file : {}", config_path.display()));
    info(format!("Database    : {}", cfg.database));

    let link = engine.link()?;
    engine.audit("init", &cfg.database, "Ledger initialized");

    success(format!("Ledger initialized at {}", link));

    Ok(Response::Initialized {
        status: "initialized".to_string(),
        config: config_path.to_string_lossy().to_string(),
        database: cfg.database.clone(),
    })
}
