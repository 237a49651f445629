//! Container migrations, tracked with `PRAGMA user_version`.

use crate::db::log::{has_actor_column, log_table_exists};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::file_stamp;
use rusqlite::Connection;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Version written once every migration below has run.
pub const LATEST_VERSION: i64 = 1;

fn user_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

fn set_user_version(conn: &Connection, v: i64) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {v};"))
}

/// Three-column logs (timestamp, action, detail) predate the actor field.
fn migrate_add_actor_to_log(conn: &Connection, db_path: &Path) -> AppResult<()> {
    if !log_table_exists(conn)? || has_actor_column(conn)? {
        return Ok(());
    }

    warning("Legacy three-column change log detected, creating safety backup before migration...");
    backup_before_migration(db_path)?;

    conn.execute_batch("ALTER TABLE log ADD COLUMN actor TEXT NOT NULL DEFAULT '';")
        .map_err(|e| AppError::Migration(format!("Failed to add 'actor' column: {e}")))?;

    success("Added 'actor' column to the change log.");
    Ok(())
}

fn backup_err(stage: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Migration(format!("Backup failed ({stage}): {e}"))
}

fn backup_before_migration(db_path: &Path) -> AppResult<PathBuf> {
    let backup_name = format!("{}-backup_pre_actor_log.zip", file_stamp());
    let backup_path = db_path.with_file_name(backup_name);

    let file = File::create(&backup_path).map_err(|e| backup_err("create", e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| backup_err("start_file", e))?;

    let content = fs::read(db_path).map_err(|e| backup_err("read", e))?;
    zip.write_all(&content)
        .map_err(|e| backup_err("write_all", e))?;
    zip.finish().map_err(|e| backup_err("finish", e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(backup_path)
}

/// Public entry point: run all pending migrations.
///
/// Invoked when a container is opened for writing; a container that is
/// already current is left untouched.
pub fn run_pending_migrations(conn: &Connection, db_path: &Path) -> AppResult<()> {
    let version = user_version(conn)?;
    if version >= LATEST_VERSION {
        return Ok(());
    }

    // 1) Legacy log → four-field log
    if version < 1 {
        migrate_add_actor_to_log(conn, db_path)?;
    }

    set_user_version(conn, LATEST_VERSION)?;
    Ok(())
}
