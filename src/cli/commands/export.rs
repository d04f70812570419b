use crate::cli::commands::{flush, open_board};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut board = open_board(cfg)?;
        let snapshot = board.get_snapshot();
        flush(&mut board);

        ExportLogic::export(&snapshot?, *format, file, *force)?;
    }
    Ok(())
}
