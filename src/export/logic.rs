// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::Sheet;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export di un foglio (tabella o change log).
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: path assoluto del file di output
    ///
    /// Returns `false` when there was nothing to export.
    pub fn export(sheet: &Sheet, format: &ExportFormat, file: &str, force: bool) -> AppResult<bool> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        if sheet.is_empty() {
            warning(format!("⚠️  No rows to export from {}.", sheet.title));
            return Ok(false);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(sheet, path)?,
            ExportFormat::Json => export_json(sheet, path)?,
            ExportFormat::Xlsx => export_xlsx(sheet, path)?,
        }

        Ok(true)
    }
}
