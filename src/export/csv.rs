use crate::errors::AppResult;
use crate::export::model::Sheet;
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

/// Scrive il foglio in CSV: riga di intestazione, poi una riga per record.
pub(crate) fn export_csv(sheet: &Sheet, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(&sheet.headers)?;

    for row in &sheet.rows {
        wtr.write_record(row.iter().map(|c| c.to_string()))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
