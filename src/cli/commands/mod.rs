pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod repair;
pub mod reset;
pub mod show;
pub mod update;

use crate::config::Config;
use crate::core::Housekeeping;
use crate::db::initialize::init_db;
use crate::db::log::flush_audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::clock::{Clock, clock_from_env};

/// Board wired to the configured SQLite database.
pub(crate) type Board = Housekeeping<DbPool, DbPool, Box<dyn Clock>>;

/// Open the database (applying pending migrations) and build the board.
/// Rows and the reset marker use separate connections to the same file.
pub(crate) fn open_board(cfg: &Config) -> AppResult<Board> {
    let rows = DbPool::new(&cfg.database)?;
    init_db(&rows.conn)?;
    let props = DbPool::new(&cfg.database)?;
    let clock = clock_from_env(cfg.zone()?)?;

    Ok(Housekeeping::new(rows, props, clock, cfg.tables()))
}

/// Write the audit entries collected by the board into the `log` table.
pub(crate) fn flush(board: &mut Board) {
    let entries = board.take_audit();
    flush_audit(&board.rows().conn, &entries);
}
