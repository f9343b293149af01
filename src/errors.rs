//! Unified application error type.
//! Engine, store, config and cli all return AppError so the dispatcher can
//! turn any failure into the same `{ "error": ... }` payload.

use chrono::NaiveDateTime;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Attendance can only be logged after {}", .cutoff.format("%-I:%M %p"))]
    TooEarly { cutoff: NaiveDateTime },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Aggregation errors
    // ---------------------------
    #[error("No attendance data available")]
    EmptyLedger,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Serialization / export
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Backup error: {0}")]
    Backup(String),
}

pub type AppResult<T> = Result<T, AppError>;
