//! The Main region: the `main` table holding the current rows.
//!
//! SQLite column order is the header order and column names are the header
//! names. The hidden `_row` key keeps row order. Columns carry no declared
//! type, so every cell keeps its own storage class.

use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Row, Table};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{Connection, OptionalExtension, params_from_iter};

/// Hidden ordering column; not a valid header name.
pub const ROW_KEY: &str = "_row";

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Check if the `main` table exists.
pub fn main_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='main'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `main` table for `headers`.
pub fn create_main_table(conn: &Connection, headers: &[String]) -> rusqlite::Result<()> {
    let mut cols = vec![format!("{} INTEGER PRIMARY KEY", quote_ident(ROW_KEY))];
    cols.extend(headers.iter().map(|h| quote_ident(h)));

    conn.execute_batch(&format!("CREATE TABLE main ({});", cols.join(", ")))
}

/// Header names of the stored table, in column order.
pub fn read_headers(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('main')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut headers = Vec::new();
    let mut has_key = false;
    for c in cols {
        let c = c?;
        if c == ROW_KEY {
            has_key = true;
        } else {
            headers.push(c);
        }
    }

    if !has_key || headers.is_empty() {
        return Err(AppError::StorageCorrupt(
            "the 'main' table does not have the expected layout".into(),
        ));
    }

    Ok(headers)
}

fn cell_from_sql(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Empty,
        ValueRef::Integer(i) => CellValue::Number(i as f64),
        ValueRef::Real(f) => CellValue::Number(f),
        ValueRef::Text(t) | ValueRef::Blob(t) => {
            CellValue::Text(String::from_utf8_lossy(t).into_owned())
        }
    }
}

fn cell_to_sql(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::Number(n) => Value::Real(*n),
        CellValue::Text(s) => Value::Text(s.clone()),
    }
}

/// Load the stored table (schema + rows in order).
pub fn read_table(conn: &Connection) -> AppResult<Table> {
    let headers = read_headers(conn)?;

    let cols: Vec<String> = headers.iter().map(|h| quote_ident(h)).collect();
    let sql = format!(
        "SELECT {} FROM main ORDER BY {} ASC",
        cols.join(", "),
        quote_ident(ROW_KEY)
    );

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let mut row = Row::new();
        for (i, h) in headers.iter().enumerate() {
            row.set(h.clone(), cell_from_sql(r.get_ref(i)?));
        }
        out.push(row);
    }

    Ok(Table::with_rows(headers, out))
}

/// Replace every stored row with `rows`, projected onto `headers`.
pub fn replace_rows(conn: &Connection, headers: &[String], rows: &[Row]) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM main", [])?;

    if rows.is_empty() {
        return Ok(());
    }

    let mut cols = vec![quote_ident(ROW_KEY)];
    cols.extend(headers.iter().map(|h| quote_ident(h)));
    let placeholders: Vec<String> = (1..=cols.len()).map(|i| format!("?{i}")).collect();

    let sql = format!(
        "INSERT INTO main ({}) VALUES ({})",
        cols.join(", "),
        placeholders.join(", ")
    );
    let mut stmt = conn.prepare(&sql)?;

    for (idx, row) in rows.iter().enumerate() {
        let mut values = Vec::with_capacity(cols.len());
        values.push(Value::Integer(idx as i64 + 1));
        values.extend(headers.iter().map(|h| cell_to_sql(row.get(h))));
        stmt.execute(params_from_iter(values))?;
    }

    Ok(())
}

pub fn count_rows(conn: &Connection) -> rusqlite::Result<i64> {
    if !main_table_exists(conn)? {
        return Ok(0);
    }
    conn.query_row("SELECT COUNT(*) FROM main", [], |row| row.get(0))
}
