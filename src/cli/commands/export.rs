use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::TableStore;
use crate::errors::AppResult;
use crate::export::{ExportLogic, Sheet};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        log,
        force,
    } = cmd
    {
        let path = cfg.database_path();

        let sheet = if *log {
            Sheet::from_log(&TableStore::read_log(&path)?)
        } else {
            Sheet::from_table(&TableStore::load(&path, &cfg.headers)?)
        };

        ExportLogic::export(&sheet, format, file, *force)?;
    }
    Ok(())
}
