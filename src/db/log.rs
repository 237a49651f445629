//! The Log region: an append-only `log` table of `LogRecord`s.

use crate::errors::{AppError, AppResult};
use crate::models::{LogAction, LogRecord};
use rusqlite::{Connection, OptionalExtension, params};

/// Ensure that the `log` table exists with the four-field schema.
pub fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            action    TEXT NOT NULL,
            actor     TEXT NOT NULL DEFAULT '',
            detail    TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
}

/// Check if the `log` table exists.
pub fn log_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='log'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `log` table has an `actor` column (absent in legacy logs).
pub fn has_actor_column(conn: &Connection) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('log')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "actor" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Append one record after the last existing entry.
pub fn append(conn: &Connection, record: &LogRecord) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (timestamp, action, actor, detail)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        record.timestamp,
        record.action.as_str(),
        record.actor,
        record.detail
    ])?;

    Ok(())
}

/// All entries in append order, oldest first.
pub fn read_all(conn: &Connection) -> AppResult<Vec<LogRecord>> {
    if !log_table_exists(conn)? {
        return Ok(Vec::new());
    }

    let actor = if has_actor_column(conn)? { "actor" } else { "NULL" };
    let mut stmt = conn.prepare(&format!(
        "SELECT timestamp, action, {actor}, detail FROM log ORDER BY rowid ASC"
    ))?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, Option<String>>(3)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (timestamp, action, actor, detail) = r?;
        let action = LogAction::from_db_str(&action).ok_or_else(|| {
            AppError::StorageCorrupt(format!("unknown log action '{action}'"))
        })?;
        out.push(LogRecord {
            timestamp,
            action,
            actor: actor.unwrap_or_default(),
            detail: detail.unwrap_or_default(),
        });
    }

    Ok(out)
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    if !log_table_exists(conn)? {
        return Ok(0);
    }
    conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))
}
