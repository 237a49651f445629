use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::TableStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the container with the configured headers, keeping any existing table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cfg = cfg.init_all(cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing rsheetlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path.display());

    let table = TableStore::initialize(&db_path, &cfg.headers)?;

    if let Some(mismatch) = TableStore::schema_mismatch(&table, &cfg.headers) {
        warning(mismatch);
    }

    success(format!(
        "Database initialized at {} ({} column(s), {} row(s))",
        db_path.display(),
        table.headers().len(),
        table.len()
    ));
    Ok(())
}
