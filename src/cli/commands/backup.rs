use crate::cli::response::Response;
use crate::config::Config;
use crate::core::AttendanceEngine;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::LedgerStore;
use std::path::Path;

pub fn handle<S: LedgerStore>(
    engine: &mut AttendanceEngine<S>,
    cfg: &Config,
    file: &str,
    compress: bool,
    force: bool,
) -> AppResult<Response> {
    match BackupLogic::backup(Path::new(&cfg.database), file, compress, force)? {
        Some(path) => {
            let path = path.to_string_lossy().to_string();
            let message = if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            };
            engine.audit("backup", &path, message);
            Ok(Response::Backup {
                status: "backup".to_string(),
                file: path,
            })
        }
        None => Ok(Response::status("cancelled", "Backup cancelled.")),
    }
}
