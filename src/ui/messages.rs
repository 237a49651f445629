use crate::errors::AppError;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", FG_BLUE, BOLD, msg, RESET);
}

/// Suggested next step for conditions the user can act on.
pub fn hint_for(err: &AppError) -> Option<&'static str> {
    match err {
        AppError::StorageCorrupt(_) => {
            Some("Run `rsheetlog reset` to move the damaged file aside and start fresh.")
        }
        AppError::NoValidData => Some("Nothing was written; use `rsheetlog clear` to empty the table."),
        AppError::StorageWriteFailed(_) | AppError::LogAppendFailed(_) => {
            Some("Check disk space and permissions, then retry.")
        }
        AppError::AuthDenied(_) => Some("Check --user and RSHEETLOG_PASSWORD."),
        _ => None,
    }
}

/// Print an error and its hint to stderr.
pub fn report(err: &AppError) {
    error(err);
    if let Some(hint) = hint_for(err) {
        eprintln!("   {hint}");
    }
}
