use crate::config::Config;
use crate::core::store::TableStore;
use crate::errors::AppResult;
use crate::models::Table;
use crate::ui::messages::{header, info};
use crate::utils::table::TextTable;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let table = TableStore::load(&cfg.database_path(), &cfg.headers)?;
    print_table(&table);
    Ok(())
}

/// Render the table with 1-based row numbers.
pub fn print_table(table: &Table) {
    header(format!("Table ({} row(s))", table.len()));

    if table.is_empty() {
        info(format!("No rows yet. Columns: {}", table.headers().join(", ")));
        return;
    }

    let mut cols = vec!["#".to_string()];
    cols.extend(table.headers().iter().cloned());
    let mut out = TextTable::new(&cols);

    for (i, row) in table.rows().iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(table.cells(row).map(|c| c.to_string()));
        out.add_row(cells);
    }

    print!("{}", out.render());
}
