use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::store::TableStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Add { set } = cmd {
        let path = cfg.database_path();

        // Working copy: edits never touch the container until save.
        let mut table = TableStore::load(&path, &cfg.headers)?;
        let assignments = EditLogic::parse_assignments(set, &table, &cfg.numeric_columns)?;

        let n = EditLogic::add_row(&mut table, &assignments);
        let record = TableStore::save(&table, &path, actor)?;

        success(format!("Row {} added ({}).", n, record.detail));
    }

    Ok(())
}
