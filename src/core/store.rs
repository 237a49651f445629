//! Table synchronization: reconcile an in-memory table with the container.
//!
//! Every operation opens the container, does its work and drops the
//! connection before returning. The store keeps no state between calls.

use crate::core::validate::ensure_valid_data;
use crate::db::pool::{DbPool, write_failed};
use crate::db::{log, main_region};
use crate::errors::{AppError, AppResult};
use crate::models::table::validate_headers;
use crate::models::{LogAction, LogRecord, Table};
use std::path::Path;

pub struct TableStore;

impl TableStore {
    /// Create whichever region is missing and return the current table.
    ///
    /// An existing Main region is never touched, even if its headers differ
    /// from `headers` (see [`TableStore::schema_mismatch`]).
    pub fn initialize(path: &Path, headers: &[String]) -> AppResult<Table> {
        check_headers(headers)?;

        let mut pool = DbPool::open(path)?;

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            if !main_region::main_table_exists(&tx)? {
                main_region::create_main_table(&tx, headers).map_err(write_failed)?;
            }
            if !log::log_table_exists(&tx)? {
                log::ensure_log_table(&tx).map_err(write_failed)?;
            }

            tx.commit().map_err(write_failed)?;
            Ok(())
        })?;

        main_region::read_table(&pool.conn)
    }

    /// Current table; an absent container or Main region yields an empty
    /// table with `headers`.
    pub fn load(path: &Path, headers: &[String]) -> AppResult<Table> {
        let Some(pool) = DbPool::open_existing(path)? else {
            return Ok(Table::new(headers.to_vec()));
        };

        if !main_region::main_table_exists(&pool.conn)? {
            return Ok(Table::new(headers.to_vec()));
        }

        main_region::read_table(&pool.conn)
    }

    /// Overwrite the Main region with `table` and append an "Update" record.
    ///
    /// Cells are matched by column name against the stored schema: extra
    /// columns are ignored and missing ones stored empty. Both writes share
    /// one transaction; on any error the container keeps its prior content.
    pub fn save(table: &Table, path: &Path, actor: Option<&str>) -> AppResult<LogRecord> {
        // Reject before creating, migrating or locking anything.
        let schema = Self::stored_headers(path)?;
        if schema.is_none() {
            check_headers(table.headers())?;
        }
        ensure_valid_data(schema.as_deref().unwrap_or(table.headers()), table.rows())?;

        let mut pool = DbPool::open(path)?;

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let headers = ensure_regions(&tx, table.headers())?;
            ensure_valid_data(&headers, table.rows())?;

            main_region::replace_rows(&tx, &headers, table.rows()).map_err(write_failed)?;

            let record = LogRecord::new(
                LogAction::Update,
                actor,
                format!("{} row(s) saved", table.len()),
            );
            log::append(&tx, &record).map_err(|e| AppError::LogAppendFailed(e.to_string()))?;

            tx.commit().map_err(write_failed)?;
            Ok(record)
        })
    }

    /// Reset the Main region to header-only and append a "Clear" record.
    ///
    /// Always allowed: no emptiness check applies.
    pub fn clear(path: &Path, headers: &[String], actor: Option<&str>) -> AppResult<LogRecord> {
        check_headers(headers)?;

        let mut pool = DbPool::open(path)?;

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let schema = ensure_regions(&tx, headers)?;
            let removed = main_region::count_rows(&tx)?;

            main_region::replace_rows(&tx, &schema, &[]).map_err(write_failed)?;

            let record = LogRecord::new(
                LogAction::Clear,
                actor,
                format!("table cleared, {removed} row(s) removed"),
            );
            log::append(&tx, &record).map_err(|e| AppError::LogAppendFailed(e.to_string()))?;

            tx.commit().map_err(write_failed)?;
            Ok(record)
        })
    }

    /// Every log entry, oldest first; no container means no history.
    pub fn read_log(path: &Path) -> AppResult<Vec<LogRecord>> {
        match DbPool::open_existing(path)? {
            Some(pool) => log::read_all(&pool.conn),
            None => Ok(Vec::new()),
        }
    }

    /// Headers of the stored Main region, read without writing anything.
    fn stored_headers(path: &Path) -> AppResult<Option<Vec<String>>> {
        let Some(pool) = DbPool::open_existing(path)? else {
            return Ok(None);
        };

        if !main_region::main_table_exists(&pool.conn)? {
            return Ok(None);
        }

        main_region::read_headers(&pool.conn).map(Some)
    }

    /// `SchemaMismatch` when the stored headers differ from `expected`.
    pub fn schema_mismatch(table: &Table, expected: &[String]) -> Option<AppError> {
        if table.headers() == expected {
            return None;
        }
        Some(AppError::SchemaMismatch {
            expected: expected.join(", "),
            found: table.headers().join(", "),
        })
    }
}

fn check_headers(headers: &[String]) -> AppResult<()> {
    validate_headers(headers)?;
    if headers
        .iter()
        .any(|h| h.eq_ignore_ascii_case(main_region::ROW_KEY))
    {
        return Err(AppError::InvalidHeaders(format!(
            "'{}' is reserved",
            main_region::ROW_KEY
        )));
    }
    Ok(())
}

/// Create missing regions (Main with `headers`) and return the stored schema.
fn ensure_regions(conn: &rusqlite::Connection, headers: &[String]) -> AppResult<Vec<String>> {
    if !main_region::main_table_exists(conn)? {
        check_headers(headers)?;
        main_region::create_main_table(conn, headers).map_err(write_failed)?;
    }
    if !log::log_table_exists(conn)? {
        log::ensure_log_table(conn).map_err(write_failed)?;
    }
    main_region::read_headers(conn)
}
