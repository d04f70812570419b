use crate::core::reset::RESET_MARKER_KEY;
use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::{PropertyStore, RowStore};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SHEETS
    //
    let sheets = pool.sheet_names()?;
    println!("{}• Tables:{}", CYAN, RESET);
    if sheets.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for name in &sheets {
        let rows = pool.last_row(name)?;
        println!(
            "    {:<12} {}{}{} rows (header included)",
            name, GREEN, rows, RESET
        );
    }

    //
    // 3) LAST RESET
    //
    let marker = pool
        .get(RESET_MARKER_KEY)?
        .unwrap_or_else(|| format!("{GREY}never{RESET}"));
    println!("{}• Last daily reset:{} {}", CYAN, RESET, marker);

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    let latest = versions
        .last()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Schema version:{} {}", CYAN, RESET, latest);

    println!();
    Ok(())
}
