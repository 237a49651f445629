//! Time utilities: log timestamps and file-name stamps.

use chrono::Local;

/// Local timestamp with second precision, as written in the change log.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Compact local timestamp usable inside file names.
pub fn file_stamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}
