//! Unified application error type.
//! All modules (db, core, cli, export, auth) return AppError to keep the
//! error handling consistent and easy to surface as a user message.

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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage is corrupt or not a spreadsheet container: {0} (run `reset` to start fresh)")]
    StorageCorrupt(String),

    #[error("Failed to write the table: {0}")]
    StorageWriteFailed(String),

    #[error("Failed to append to the change log: {0} (table left unchanged)")]
    LogAppendFailed(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Table logic
    // ---------------------------
    #[error("No valid data to save: the table is empty or every data cell is blank")]
    NoValidData,

    #[error("Existing table keeps its headers [{found}] instead of [{expected}]")]
    SchemaMismatch { expected: String, found: String },

    #[error("Invalid headers: {0}")]
    InvalidHeaders(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid cell assignment '{0}' (expected COLUMN=VALUE)")]
    InvalidCell(String),

    #[error("Column '{column}' expects a number, got '{value}'")]
    InvalidNumber { column: String, value: String },

    #[error("Row {0} does not exist")]
    InvalidRow(usize),

    // ---------------------------
    // Auth
    // ---------------------------
    #[error("Access denied for user '{0}'")]
    AuthDenied(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
