use crate::db::pool::DbPool;
use crate::db::{log, main_region};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        pool.path.display(),
        RESET
    );
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA + ROWS
    //
    if main_region::main_table_exists(&pool.conn)? {
        let headers = main_region::read_headers(&pool.conn)?;
        println!("{}• Columns:{} {}", CYAN, RESET, headers.join(", "));
    } else {
        println!("{}• Columns:{} {GREY}--{RESET}", CYAN, RESET);
    }

    let rows = main_region::count_rows(&pool.conn)?;
    println!("{}• Rows:{} {}{}{}", CYAN, RESET, GREEN, rows, RESET);

    //
    // 3) CHANGE LOG
    //
    let entries = log::count(&pool.conn)?;
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREEN, entries, RESET);

    if entries > 0 {
        let last: Option<(String, String)> = pool
            .conn
            .query_row(
                "SELECT timestamp, action FROM log ORDER BY rowid DESC LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        if let Some((ts, action)) = last {
            println!("{}• Last change:{} {} ({})", CYAN, RESET, ts, action);
        }
    }

    println!();
    Ok(())
}
