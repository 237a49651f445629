//! Working-copy edits performed by the CLI before a save.
//!
//! The CLI loads the table once, applies the edit here and hands the result
//! to `TableStore::save`; the store itself never sees partial edits.

use crate::core::validate::STAMP_COLUMN;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Row, Table};
use crate::utils::time::now_stamp;

/// One `COLUMN=VALUE` assignment from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: CellValue,
}

impl Assignment {
    /// Parse `COLUMN=VALUE`; the value may be empty, the column may not.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let (column, value) = raw
            .split_once('=')
            .ok_or_else(|| AppError::InvalidCell(raw.to_string()))?;

        let column = column.trim();
        if column.is_empty() {
            return Err(AppError::InvalidCell(raw.to_string()));
        }

        Ok(Self {
            column: column.to_string(),
            value: CellValue::parse(value),
        })
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Parse and check assignments against the table schema.
    ///
    /// Columns listed in `numeric_columns` only accept numbers (or blanks).
    pub fn parse_assignments(
        raw: &[String],
        table: &Table,
        numeric_columns: &[String],
    ) -> AppResult<Vec<Assignment>> {
        let mut out = Vec::with_capacity(raw.len());

        for r in raw {
            let a = Assignment::parse(r)?;

            if !table.has_column(&a.column) {
                return Err(AppError::UnknownColumn(a.column));
            }

            if numeric_columns.contains(&a.column) && !a.value.is_empty() && !a.value.is_number()
            {
                return Err(AppError::InvalidNumber {
                    column: a.column,
                    value: a.value.to_string(),
                });
            }

            out.push(a);
        }

        Ok(out)
    }

    /// Append a new row; returns its 1-based number.
    pub fn add_row(table: &mut Table, assignments: &[Assignment]) -> usize {
        let mut row = Row::new();
        apply(&mut row, assignments);
        stamp(table, &mut row, assignments);
        table.push_row(row.project(table.headers()));
        table.len()
    }

    /// Update cells of an existing 1-based row.
    pub fn edit_row(table: &mut Table, number: usize, assignments: &[Assignment]) -> AppResult<()> {
        let has_stamp = table.has_column(STAMP_COLUMN);
        let row = table.row_mut(number)?;
        apply(row, assignments);
        if has_stamp && !sets_stamp(assignments) {
            row.set(STAMP_COLUMN, now_stamp());
        }
        Ok(())
    }

    /// Remove a 1-based row.
    pub fn delete_row(table: &mut Table, number: usize) -> AppResult<Row> {
        table.remove_row(number)
    }
}

fn apply(row: &mut Row, assignments: &[Assignment]) {
    for a in assignments {
        row.set(a.column.clone(), a.value.clone());
    }
}

fn sets_stamp(assignments: &[Assignment]) -> bool {
    assignments.iter().any(|a| a.column == STAMP_COLUMN)
}

fn stamp(table: &Table, row: &mut Row, assignments: &[Assignment]) {
    if table.has_column(STAMP_COLUMN) && !sets_stamp(assignments) {
        row.set(STAMP_COLUMN, now_stamp());
    }
}
