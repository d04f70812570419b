use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{ensure_tables, init_db};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its migrations
///  - the Rooms / Area / Staff tables (header row only)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rHousekeeper…");
    println!("🗄️  Database   : {}", &cfg.database);

    let mut pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let tables = cfg.tables();
    ensure_tables(&mut pool, &tables.rooms, &tables.areas, &tables.staff)?;

    success(format!("Database initialized at {}", &cfg.database));

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 rHousekeeper initialization completed!");
    Ok(())
}
