use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::TableStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !ask_confirmation("Remove ALL rows from the table? Headers are kept.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let record = TableStore::clear(&cfg.database_path(), &cfg.headers, actor)?;
        success(format!("Table cleared ({}).", record.detail));
    }

    Ok(())
}
