use crate::errors::AppResult;
use crate::export::model::Sheet;
use crate::export::notify_export_success;
use std::path::Path;

/// Scrive il foglio in JSON formattato.
pub(crate) fn export_json(sheet: &Sheet, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sheet)?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
