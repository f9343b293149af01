use crate::cli::response::Response;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand: report the effective configuration.
pub fn handle(cfg: &Config) -> AppResult<Response> {
    Ok(Response::Config {
        config: cfg.clone(),
    })
}
