#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rattendance::core::{AttendanceEngine, CutoffPolicy};
use rattendance::store::{LedgerRow, MemoryLedger};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a private temp dir so the
/// user's real configuration is never read or written.
pub fn rti(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", test_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a command and parse its stdout as JSON.
pub fn json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run rattendance");
    assert!(output.status.success(), "command exited non-zero");
    serde_json::from_slice(&output.stdout).expect("stdout is one JSON document")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn engine() -> AttendanceEngine<MemoryLedger> {
    AttendanceEngine::new(MemoryLedger::new("test"), CutoffPolicy::default())
}

pub fn engine_with_rows(rows: &[(&str, &str, &str)]) -> AttendanceEngine<MemoryLedger> {
    let rows = rows
        .iter()
        .map(|(n, ts, d)| LedgerRow::new(*n, *ts, *d))
        .collect::<Vec<_>>();
    AttendanceEngine::new(MemoryLedger::with_rows("seeded", rows), CutoffPolicy::default())
}
