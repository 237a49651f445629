use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{LATEST_VERSION, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let path = cfg.database_path();

        let mut pool = DbPool::open_existing(&path)?.ok_or_else(|| {
            AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {} (run `init` first)", path.display()),
            ))
        })?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            run_pending_migrations(&pool.conn, &path)?;
            println!(
                "{}✔ Database schema is at version {}.{}\n",
                GREEN, LATEST_VERSION, RESET
            );
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut pool)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            pool.conn.execute_batch("VACUUM;")?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
