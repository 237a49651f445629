use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::store::TableStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Del { row } = cmd {
        let path = cfg.database_path();

        let mut table = TableStore::load(&path, &cfg.headers)?;
        EditLogic::delete_row(&mut table, *row)?;

        // Removing the last data row is rejected by save; `clear` is the way to empty.
        TableStore::save(&table, &path, actor)?;

        success(format!("Row {} deleted.", row));
    }

    Ok(())
}
