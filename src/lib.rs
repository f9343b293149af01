//! rAttendance library root.
//! Exposes the CLI parser, the attendance engine, the ledger stores and the
//! high-level `run()` used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use cli::response::Response;
use config::Config;
use crate::core::{AttendanceEngine, CutoffPolicy};
use errors::AppResult;
use store::{LedgerStore, SqliteLedger};

/// Central command dispatcher
pub fn dispatch<S: LedgerStore>(
    cli: &Cli,
    cfg: &Config,
    engine: &mut AttendanceEngine<S>,
) -> AppResult<Response> {
    match &cli.command {
        Commands::Init => commands::init::handle(engine, cfg, cli.test),
        Commands::Log { name, at } => commands::log::handle(engine, name, at.as_deref()),
        Commands::Attendance { name } => commands::query::attendance(engine, name),
        Commands::Stats => commands::query::stats(engine),
        Commands::Top => commands::query::top(engine),
        Commands::Check { name } => commands::query::check(engine, name),
        Commands::Clear { yes } => commands::clear::handle(engine, *yes),
        Commands::Link => commands::query::link(engine),
        Commands::Export { file, force } => commands::export::handle(engine, file, *force),
        Commands::Backup {
            file,
            compress,
            force,
        } => commands::backup::handle(engine, cfg, file, *compress, *force),
        Commands::Config => commands::config::handle(cfg),
        Commands::Audit => commands::audit::handle(engine),
    }
}

/// Load the configuration, open the SQLite ledger and dispatch `cli`.
/// Any failure is folded into an error payload.
pub fn execute(cli: &Cli) -> Response {
    let result = load_config(cli).and_then(|cfg| {
        let policy = CutoffPolicy::from_config(&cfg)?;
        let mut engine = AttendanceEngine::new(SqliteLedger::new(&cfg.database), policy);
        dispatch(cli, &cfg, &mut engine)
    });

    result.unwrap_or_else(|e| {
        log::error!("{} failed: {}", command_name(&cli.command), e);
        Response::error(&e)
    })
}

fn load_config(cli: &Cli) -> AppResult<Config> {
    let cfg = Config::load()?;
    Ok(match &cli.db {
        Some(custom_db) => cfg.with_database(custom_db),
        None => cfg,
    })
}

fn command_name(cmd: &Commands) -> &'static str {
    match cmd {
        Commands::Init => "init",
        Commands::Log { .. } => "log",
        Commands::Attendance { .. } => "attendance",
        Commands::Stats => "stats",
        Commands::Top => "top",
        Commands::Check { .. } => "check",
        Commands::Clear { .. } => "clear",
        Commands::Link => "link",
        Commands::Export { .. } => "export",
        Commands::Backup { .. } => "backup",
        Commands::Config => "config",
        Commands::Audit => "audit",
    }
}

/// Initialize logging on stderr: warn by default, `-v` debug, `-vv` trace.
/// `RUST_LOG` still takes precedence when set.
pub fn init_logging(verbose: u8) {
    use env_logger::{Builder, Env};
    use log::LevelFilter;
    use std::io::Write;

    let default_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

/// Entry point used by main.rs: prints exactly one JSON payload.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let response = execute(&cli);
    println!("{}", response.to_json(cli.pretty));
}
