use crate::cli::parser::{Commands, TableKind};
use crate::config::Config;
use crate::core::import::import_csv;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { table, file } = cmd {
        let tables = cfg.tables();
        let name = match table {
            TableKind::Rooms => tables.rooms,
            TableKind::Areas => tables.areas,
            TableKind::Staff => tables.staff,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let count = import_csv(&mut pool, &name, Path::new(file))?;
        success(format!("Imported {count} rows into '{name}' from {file}"));

        if let Err(e) = ttlog(
            &pool.conn,
            "import",
            &name,
            &format!("{count} rows imported from {file}"),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
    Ok(())
}
