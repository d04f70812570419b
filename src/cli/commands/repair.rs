use crate::cli::commands::{flush, open_board};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Repair) {
        let mut board = open_board(cfg)?;
        let result = board.repair_area_time_columns();
        flush(&mut board);

        match result? {
            0 => info("No area rows needed repair."),
            n => success(format!("Repaired {n} area rows.")),
        }
    }
    Ok(())
}
