//! Unified application error type.
//! The shift and productivity algorithms never fail on their input domain;
//! everything that can fail (storage, files, CLI arguments) returns AppError.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid case category: {0}")]
    InvalidCategory(String),

    #[error("Invalid multiplier override: {0} (expected CATEGORY=VALUE)")]
    InvalidMultiplier(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No case at position {0}")]
    InvalidCaseIndex(usize),

    #[error("No shift at position {0}")]
    InvalidShiftIndex(usize),

    #[error("No shift data available, run `shiftlogger shifts import` first")]
    NoShiftData,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
