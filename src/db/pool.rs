//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! A `DbPool` lives for the duration of one store operation: it is opened,
//! used and dropped before the operation returns.

use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, ErrorCode, OpenFlags};
use std::path::{Path, PathBuf};

pub struct DbPool {
    pub conn: Connection,
    pub path: PathBuf,
}

impl DbPool {
    /// Open the container read-write, creating the file when missing, and
    /// bring it to the latest layout.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::StorageWriteFailed(e.to_string()))?;
        }

        let conn = Connection::open(path).map_err(|e| storage_error(e, path))?;
        let pool = Self::ready(conn, path)?;

        run_pending_migrations(&pool.conn, path)?;
        Ok(pool)
    }

    /// Open an existing container as it is; `None` when there is no file at `path`.
    ///
    /// No migration runs here: readers cope with older layouts.
    pub fn open_existing(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| storage_error(e, path))?;

        Self::ready(conn, path).map(Some)
    }

    fn ready(conn: Connection, path: &Path) -> AppResult<Self> {
        // SQLite opens lazily: the first read tells whether the file is a database.
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| storage_error(e, path))?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}

/// Map SQLite failures that mean "this is not our container" to `StorageCorrupt`.
pub fn storage_error(e: rusqlite::Error, path: &Path) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if matches!(
                err.code,
                ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt
            ) =>
        {
            AppError::StorageCorrupt(format!("{}: {}", path.display(), e))
        }
        _ => AppError::Db(e),
    }
}

/// Classify a failure that happened while writing the Table region.
pub fn write_failed(e: impl std::fmt::Display) -> AppError {
    AppError::StorageWriteFailed(e.to_string())
}
