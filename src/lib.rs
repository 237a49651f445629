//! rsheetlog library root.
//! Exposes the table store, the CLI parser, the high-level run() function
//! and the internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::store::TableStore;
pub use errors::{AppError, AppResult};
pub use models::{CellValue, LogAction, LogRecord, Row, Table};

use auth::{Argon2Gate, authorize, read_password};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Central command dispatcher
///
/// `actor` is the identity that passed the auth gate (if any).
pub fn dispatch(cli: &Cli, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Show => cli::commands::show::handle(cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, actor),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, actor),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, actor),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg, actor),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Passwd { .. } => cli::commands::passwd::handle(&cli.command),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override del DB da riga di comando,
    //    risolto come fa `init` (nomi relativi → cartella di config)
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db);
    }

    // 4️⃣ auth gate: on deny nothing below runs
    let actor = if cli.command.is_public() {
        cli.user.clone()
    } else {
        let gate = Argon2Gate::new(cfg.users.clone());
        authorize(&gate, cli.user.as_deref(), read_password)?
    };

    // 5️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg, actor.as_deref())
}
