//! Guard against overwriting real data with a blank grid.

use crate::errors::{AppError, AppResult};
use crate::models::Row;

/// Leading identity columns (e.g. an id and a name).
pub const KEY_COLUMNS: usize = 2;

/// Bookkeeping column filled automatically on add/edit; never counts as data.
pub const STAMP_COLUMN: &str = "Timestamp";

/// Columns whose content decides whether a table carries data.
///
/// These are the non-key columns minus the stamp column. A schema with no
/// such column falls back to its key columns.
pub fn data_columns(headers: &[String]) -> Vec<&String> {
    let data: Vec<&String> = headers
        .iter()
        .skip(KEY_COLUMNS)
        .filter(|h| h.as_str() != STAMP_COLUMN)
        .collect();

    if data.is_empty() {
        headers.iter().take(KEY_COLUMNS).collect()
    } else {
        data
    }
}

/// `NoValidData` when there are no rows or every data cell is blank.
pub fn ensure_valid_data(headers: &[String], rows: &[Row]) -> AppResult<()> {
    let columns = data_columns(headers);

    let any_data = rows
        .iter()
        .any(|row| columns.iter().any(|c| !row.get(c).is_empty()));

    if any_data {
        Ok(())
    } else {
        Err(AppError::NoValidData)
    }
}
