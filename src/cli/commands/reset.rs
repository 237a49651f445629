use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let path = cfg.database_path();

        let prompt = format!(
            "Move {} aside and start from an empty table? The old file is kept, not deleted.",
            path.display()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let (_, table) = BackupLogic::reset(&path, &cfg.headers)?;
        success(format!(
            "Fresh database initialized with columns: {}",
            table.headers().join(", ")
        ));
    }

    Ok(())
}
