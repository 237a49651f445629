use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::store::TableStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Edit { row, set } = cmd {
        let path = cfg.database_path();

        let mut table = TableStore::load(&path, &cfg.headers)?;
        let assignments = EditLogic::parse_assignments(set, &table, &cfg.numeric_columns)?;

        EditLogic::edit_row(&mut table, *row, &assignments)?;
        TableStore::save(&table, &path, actor)?;

        success(format!("Row {} updated.", row));
    }

    Ok(())
}
